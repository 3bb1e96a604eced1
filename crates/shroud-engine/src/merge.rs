//! Adjacent PERSON merging, run before overlap resolution.
//!
//! Recognizers often split "Hannah Louise Mercer" into several PERSON hits.
//! Neighbouring hits separated only by short punctuation/whitespace gaps are
//! fused into one span so the name gets a single tag.

use shroud_core::types::{CanonicalType, Span, SpanSource};

use crate::tagging::aliases::looks_like_name;

fn is_gap_char(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '.' | '\'' | '-')
}

fn joinable(text: &str, left: &Span, right: &Span, max_gap: usize) -> bool {
    if right.start < left.end {
        return false;
    }
    let Some(gap) = text.get(left.end..right.start) else {
        return false;
    };
    gap.chars().count() <= max_gap
        && gap.chars().all(is_gap_char)
        && looks_like_name(&left.original)
        && looks_like_name(&right.original)
}

fn fuse(text: &str, run: &[Span]) -> Vec<Span> {
    let (Some(first), Some(last)) = (run.first(), run.last()) else {
        return Vec::new();
    };
    if run.len() == 1 {
        return vec![first.clone()];
    }
    let score = run.iter().map(|s| s.score).fold(0.0, f64::max);
    match Span::from_text(
        text,
        first.start,
        last.end,
        CanonicalType::Person,
        score,
        SpanSource::Merge,
    ) {
        Some(merged) => vec![merged],
        None => run.to_vec(),
    }
}

/// Merge runs of up to `max_run` adjacent PERSON spans. Other labels pass
/// through untouched.
pub fn merge_adjacent_persons(
    text: &str,
    spans: Vec<Span>,
    max_run: usize,
    max_gap: usize,
) -> Vec<Span> {
    let (mut persons, mut out): (Vec<Span>, Vec<Span>) = spans
        .into_iter()
        .partition(|s| s.label == CanonicalType::Person);
    persons.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| b.end.cmp(&a.end)));

    let mut run: Vec<Span> = Vec::new();
    for span in persons {
        let extends = run.len() < max_run
            && run
                .last()
                .is_some_and(|last| joinable(text, last, &span, max_gap));
        if !extends && !run.is_empty() {
            out.extend(fuse(text, &run));
            run.clear();
        }
        run.push(span);
    }
    out.extend(fuse(text, &run));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(text: &str, start: usize, end: usize, score: f64) -> Span {
        Span::from_text(text, start, end, CanonicalType::Person, score, SpanSource::Recognizer)
            .unwrap()
    }

    #[test]
    fn split_name_is_fused() {
        let text = "Hannah Louise Mercer called";
        let merged = merge_adjacent_persons(
            text,
            vec![person(text, 7, 13, 0.6), person(text, 0, 6, 0.8), person(text, 14, 20, 0.7)],
            4,
            4,
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].original, "Hannah Louise Mercer");
        assert_eq!(merged[0].source, SpanSource::Merge);
        assert_eq!(merged[0].score, 0.8);
    }

    #[test]
    fn punctuation_gap_is_allowed_but_words_are_not() {
        let text = "Smith, John and Mary";
        let merged = merge_adjacent_persons(
            text,
            vec![person(text, 0, 5, 0.9), person(text, 7, 11, 0.9), person(text, 16, 20, 0.9)],
            4,
            4,
        );
        let originals: Vec<&str> = merged.iter().map(|s| s.original.as_str()).collect();
        assert_eq!(originals, vec!["Smith, John", "Mary"]);
    }

    #[test]
    fn run_length_is_capped() {
        let text = "Aa Bb Cc Dd Ee";
        let spans = (0..5).map(|i| person(text, i * 3, i * 3 + 2, 0.5)).collect();
        let merged = merge_adjacent_persons(text, spans, 4, 4);
        let originals: Vec<&str> = merged.iter().map(|s| s.original.as_str()).collect();
        assert_eq!(originals, vec!["Aa Bb Cc Dd", "Ee"]);
    }

    #[test]
    fn stopword_neighbours_do_not_merge() {
        let text = "Dear John";
        let merged = merge_adjacent_persons(
            text,
            vec![person(text, 0, 4, 0.9), person(text, 5, 9, 0.9)],
            4,
            4,
        );
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn other_labels_pass_through() {
        let text = "John 12/03/1990";
        let date = Span::from_text(text, 5, 15, CanonicalType::Date, 0.97, SpanSource::Pattern)
            .unwrap();
        let merged = merge_adjacent_persons(text, vec![date.clone(), person(text, 0, 4, 0.9)], 4, 4);
        assert_eq!(merged.len(), 2);
        assert!(merged.contains(&date));
    }
}
