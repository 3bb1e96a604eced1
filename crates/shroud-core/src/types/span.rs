use serde::{Deserialize, Serialize};

use super::CanonicalType;

/// Where a span came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanSource {
    /// Label-mapped output of the external recognizer.
    Recognizer,
    /// Deterministic pattern detector.
    Pattern,
    /// Synthesized by the person alias backfill sweep.
    Alias,
    /// Produced by merging adjacent person spans.
    Merge,
}

/// A half-open byte interval of the source text with a PII type and confidence.
///
/// Spans are immutable by convention: adjustments go through the `with_*`
/// constructors, which return a new span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub label: CanonicalType,
    pub score: f64,
    pub source: SpanSource,
    /// `text[start..end]` at the time the span was built.
    pub original: String,
}

impl Span {
    /// Build a span over `text[start..end]`.
    ///
    /// Returns `None` unless `start < end <= text.len()` and both ends fall
    /// on char boundaries. The score is clamped to `[0, 1]`.
    pub fn from_text(
        text: &str,
        start: usize,
        end: usize,
        label: CanonicalType,
        score: f64,
        source: SpanSource,
    ) -> Option<Self> {
        if start >= end || end > text.len() {
            return None;
        }
        let original = text.get(start..end)?;
        Some(Self {
            start,
            end,
            label,
            score: clamp_score(score),
            source,
            original: original.to_string(),
        })
    }

    /// Length in bytes.
    pub fn width(&self) -> usize {
        self.end - self.start
    }

    /// Half-open overlap test.
    pub fn overlaps(&self, other: &Span) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }

    /// Copy of this span with a different score.
    pub fn with_score(&self, score: f64) -> Self {
        Self {
            score: clamp_score(score),
            ..self.clone()
        }
    }
}

/// Clamp a confidence into `[0, 1]`, mapping NaN to 0.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

/// Raw candidate as returned by an external recognizer. Untrusted: the label
/// may be outside the taxonomy and the offsets may be out of range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedEntity {
    pub start: usize,
    pub end: usize,
    pub label: String,
    #[serde(default)]
    pub score: Option<f64>,
}

impl RecognizedEntity {
    pub fn new(start: usize, end: usize, label: impl Into<String>, score: f64) -> Self {
        Self {
            start,
            end,
            label: label.into(),
            score: Some(score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_rejects_bad_offsets() {
        let text = "café au lait";
        assert!(Span::from_text(text, 3, 3, CanonicalType::Person, 0.5, SpanSource::Pattern).is_none());
        assert!(Span::from_text(text, 0, 99, CanonicalType::Person, 0.5, SpanSource::Pattern).is_none());
        // 'é' is two bytes starting at 3; 4 is inside it.
        assert!(Span::from_text(text, 0, 4, CanonicalType::Person, 0.5, SpanSource::Pattern).is_none());
        let span = Span::from_text(text, 0, 5, CanonicalType::Person, 1.7, SpanSource::Pattern).unwrap();
        assert_eq!(span.original, "café");
        assert_eq!(span.score, 1.0);
    }

    #[test]
    fn overlap_is_half_open() {
        let text = "abcdefgh";
        let a = Span::from_text(text, 0, 4, CanonicalType::Date, 0.5, SpanSource::Pattern).unwrap();
        let b = Span::from_text(text, 4, 8, CanonicalType::Date, 0.5, SpanSource::Pattern).unwrap();
        let c = Span::from_text(text, 3, 5, CanonicalType::Date, 0.5, SpanSource::Pattern).unwrap();
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }
}
