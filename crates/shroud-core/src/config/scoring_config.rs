use serde::{Deserialize, Serialize};

use super::defaults;

/// Evaluation scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Similarity at or above which an expected value counts as found.
    pub similarity_threshold: f64,
    /// Minimum length of the shorter normalized string for containment credit.
    pub containment_min_chars: usize,
    /// How many false-positive buckets the text report lists.
    pub fp_report_top_k: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            containment_min_chars: defaults::DEFAULT_CONTAINMENT_MIN_CHARS,
            fp_report_top_k: defaults::DEFAULT_FP_REPORT_TOP_K,
        }
    }
}
