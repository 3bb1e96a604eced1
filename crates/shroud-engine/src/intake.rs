//! Recognizer intake: map untrusted candidates onto canonical spans.

use shroud_core::types::{CanonicalType, RecognizedEntity, Span, SpanSource};
use shroud_observability::events;

/// Convert recognizer candidates into spans.
///
/// Unknown labels and out-of-range or non-char-boundary offsets are dropped.
/// A missing score counts as 0.0; scores are clamped to `[0, 1]`.
pub fn canonicalize(text: &str, candidates: &[RecognizedEntity]) -> Vec<Span> {
    let mut unknown_label = 0;
    let mut bad_offsets = 0;
    let mut spans = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let Some(label) = CanonicalType::from_recognizer_label(&candidate.label) else {
            unknown_label += 1;
            continue;
        };
        let score = candidate.score.unwrap_or(0.0);
        match Span::from_text(
            text,
            candidate.start,
            candidate.end,
            label,
            score,
            SpanSource::Recognizer,
        ) {
            Some(span) => spans.push(span),
            None => bad_offsets += 1,
        }
    }

    if unknown_label > 0 || bad_offsets > 0 {
        events::recognizer_candidates_dropped(unknown_label, bad_offsets);
    }
    spans
}
