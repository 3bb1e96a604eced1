use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::PlaceholderTag;

/// What the index remembers about a tagged person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// First full surface form tagged with this tag.
    pub original: String,
    /// Best adjusted score seen for this tag.
    pub score: f64,
}

/// Name-token → PERSON tag table.
///
/// Built fresh for every run unless the caller threads one through (e.g. a
/// multi-turn chat session). The first mention that registers a key owns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonAliasIndex {
    aliases: BTreeMap<String, PlaceholderTag>,
    people: BTreeMap<PlaceholderTag, PersonRecord>,
}

impl PersonAliasIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, key: &str) -> Option<PlaceholderTag> {
        self.aliases.get(key).copied()
    }

    /// Register `key -> tag` unless the key is empty or already owned.
    pub fn register(&mut self, key: impl Into<String>, tag: PlaceholderTag) -> bool {
        let key = key.into();
        if key.is_empty() || self.aliases.contains_key(&key) {
            return false;
        }
        self.aliases.insert(key, tag);
        true
    }

    /// Remember the first surface form and the best score for a person tag.
    pub fn record_person(&mut self, tag: PlaceholderTag, original: &str, score: f64) {
        self.people
            .entry(tag)
            .and_modify(|rec| {
                if score > rec.score {
                    rec.score = score;
                }
            })
            .or_insert_with(|| PersonRecord {
                original: original.to_string(),
                score,
            });
    }

    pub fn person(&self, tag: &PlaceholderTag) -> Option<&PersonRecord> {
        self.people.get(tag)
    }

    pub fn aliases(&self) -> impl Iterator<Item = (&str, PlaceholderTag)> {
        self.aliases.iter().map(|(k, t)| (k.as_str(), *t))
    }

    /// Aliases ordered longest key first, ties broken by key.
    pub fn longest_first(&self) -> Vec<(&str, PlaceholderTag)> {
        let mut out: Vec<(&str, PlaceholderTag)> = self.aliases().collect();
        out.sort_by(|a, b| {
            b.0.chars()
                .count()
                .cmp(&a.0.chars().count())
                .then_with(|| a.0.cmp(b.0))
        });
        out
    }

    /// Highest person ordinal this index knows about (0 when empty).
    pub fn max_ordinal(&self) -> u32 {
        self.aliases
            .values()
            .chain(self.people.keys())
            .map(PlaceholderTag::ordinal)
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
