//! # shroud-recognizers
//!
//! Entity recognizers live outside the span engine. This crate holds the
//! explicit registry integrations use to share recognizer instances, and two
//! deterministic recognizers for tests, fixtures and offline evaluation.

pub mod fixed;
pub mod phrase;
pub mod registry;

pub use fixed::FixedRecognizer;
pub use phrase::{PhraseEntry, PhraseRecognizer};
pub use registry::RecognizerRegistry;

/// Lowercased, trimmed label vocabulary for case-insensitive filtering.
pub(crate) fn requested_labels(labels: &[String]) -> Vec<String> {
    labels.iter().map(|l| l.trim().to_lowercase()).collect()
}

pub(crate) fn is_requested(requested: &[String], label: &str) -> bool {
    let label = label.trim().to_lowercase();
    requested.iter().any(|r| *r == label)
}
