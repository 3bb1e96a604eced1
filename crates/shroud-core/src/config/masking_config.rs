use serde::{Deserialize, Serialize};

use super::defaults;

/// Span engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskingConfig {
    /// Score threshold forwarded to the recognizer.
    pub threshold: f64,
    /// Label vocabulary forwarded to the recognizer.
    pub labels: Vec<String>,
    /// Maximum lines an address block may span.
    pub address_max_lines: usize,
    /// Maximum characters in an address block after trimming.
    pub address_max_chars: usize,
    /// Characters before a date searched for date-of-birth markers.
    pub dob_lookbehind_chars: usize,
    /// Characters after a date searched for date-of-birth markers.
    pub dob_lookahead_chars: usize,
    /// Maximum number of adjacent PERSON spans merged into one.
    pub merge_max_run: usize,
    /// Maximum gap (characters) between merged PERSON spans.
    pub merge_max_gap: usize,
    /// Minimum letters for a name token to become an alias.
    pub alias_min_letters: usize,
    /// Run the alias backfill sweep after tagging.
    pub alias_backfill: bool,
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_THRESHOLD,
            labels: defaults::default_labels(),
            address_max_lines: defaults::DEFAULT_ADDRESS_MAX_LINES,
            address_max_chars: defaults::DEFAULT_ADDRESS_MAX_CHARS,
            dob_lookbehind_chars: defaults::DEFAULT_DOB_LOOKBEHIND_CHARS,
            dob_lookahead_chars: defaults::DEFAULT_DOB_LOOKAHEAD_CHARS,
            merge_max_run: defaults::DEFAULT_MERGE_MAX_RUN,
            merge_max_gap: defaults::DEFAULT_MERGE_MAX_GAP,
            alias_min_letters: defaults::DEFAULT_ALIAS_MIN_LETTERS,
            alias_backfill: defaults::DEFAULT_ALIAS_BACKFILL,
        }
    }
}
