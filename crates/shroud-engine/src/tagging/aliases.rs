//! Person-name heuristics: stopwords, name-shape checks, alias tokens.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::lower_collapsed;

static STOPWORDS: LazyLock<BTreeSet<&'static str>> = LazyLock::new(|| {
    [
        // Courtesy titles
        "mr", "mrs", "ms", "miss", "mx", "dr", "prof", "sir", "madam", "dame", "lord", "lady",
        "rev",
        // Months
        "january", "february", "march", "april", "may", "june", "july", "august", "september",
        "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug",
        "sep", "sept", "oct", "nov", "dec",
        // Weekdays
        "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "mon",
        "tue", "tues", "wed", "thu", "thur", "thurs", "fri", "sat", "sun",
        // Greetings and sign-offs
        "hello", "hi", "hey", "dear", "thanks", "thank", "regards", "cheers", "morning",
        "afternoon", "evening",
        // Service nouns
        "customer", "client", "user", "account", "bank", "support", "team", "manager", "agent",
        "card", "service", "payment", "transaction", "reference", "ticket", "name",
        // Glue
        "the", "and",
    ]
    .into_iter()
    .collect()
});

/// Case-insensitive stopword test.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word.to_lowercase().as_str())
}

fn is_name_char(c: char) -> bool {
    c.is_alphabetic() || c == '\'' || c == '-'
}

/// Letters, apostrophes and hyphens, with whitespace only between words;
/// at least one letter and no stopword.
pub fn looks_like_name(text: &str) -> bool {
    if text.trim() != text || text.is_empty() {
        return false;
    }
    if !text.chars().any(char::is_alphabetic) {
        return false;
    }
    text.split_whitespace().all(|word| {
        word.chars().all(is_name_char) && !is_stopword(word.trim_matches(|c| c == '\'' || c == '-'))
    })
}

/// Alias keys for a person mention: the first and last name tokens, plus
/// the full normalized name when it has more than one word.
pub fn alias_keys(original: &str, min_letters: usize) -> Vec<String> {
    let words: Vec<&str> = original.split_whitespace().collect();
    let mut keys = Vec::new();

    let edges: Vec<&str> = match words.as_slice() {
        [] => Vec::new(),
        [only] => vec![*only],
        [first, .., last] => vec![*first, *last],
    };
    for word in edges {
        if let Some(token) = alias_token(word, min_letters) {
            if !keys.contains(&token) {
                keys.push(token);
            }
        }
    }

    if words.len() > 1 && looks_like_name(&words.join(" ")) {
        keys.push(lower_collapsed(original));
    }
    keys
}

fn alias_token(word: &str, min_letters: usize) -> Option<String> {
    let token = word.trim_matches(|c: char| !c.is_alphabetic());
    if token.is_empty() || !token.chars().all(is_name_char) || is_stopword(token) {
        return None;
    }
    if token.chars().filter(|c| c.is_alphabetic()).count() < min_letters {
        return None;
    }
    Some(token.to_lowercase())
}

/// Case-insensitive, word-bounded search for an alias key. Internal spaces
/// match any whitespace run.
pub fn alias_regex(key: &str) -> Option<Regex> {
    let body = key
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    if body.is_empty() {
        return None;
    }
    Regex::new(&format!(r"(?i)\b{body}\b")).ok()
}
