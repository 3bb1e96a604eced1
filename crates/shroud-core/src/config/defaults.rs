// Single source of truth for all default values.

// --- Masking ---
pub const DEFAULT_THRESHOLD: f64 = crate::constants::DEFAULT_THRESHOLD;
pub const DEFAULT_ADDRESS_MAX_LINES: usize = 4;
pub const DEFAULT_ADDRESS_MAX_CHARS: usize = 260;
pub const DEFAULT_DOB_LOOKBEHIND_CHARS: usize = 40;
pub const DEFAULT_DOB_LOOKAHEAD_CHARS: usize = 25;
pub const DEFAULT_MERGE_MAX_RUN: usize = 4;
pub const DEFAULT_MERGE_MAX_GAP: usize = 4;
pub const DEFAULT_ALIAS_MIN_LETTERS: usize = 3;
pub const DEFAULT_ALIAS_BACKFILL: bool = true;

// --- Scoring ---
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = crate::constants::DEFAULT_SIMILARITY_THRESHOLD;
pub const DEFAULT_CONTAINMENT_MIN_CHARS: usize = 6;
pub const DEFAULT_FP_REPORT_TOP_K: usize = 12;

// --- Recognizer ---
pub const DEFAULT_REGISTRY_CAPACITY: u64 = 8;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

pub fn default_labels() -> Vec<String> {
    crate::constants::DEFAULT_RECOGNIZER_LABELS
        .iter()
        .map(|l| (*l).to_string())
        .collect()
}
