//! Span definitions per operation: masking, alias backfill, evaluation.

/// Create a masking span.
#[macro_export]
macro_rules! mask_span {
    ($text_len:expr, $recognizer:expr) => {
        tracing::info_span!("shroud.mask", text_len = $text_len, recognizer = %$recognizer)
    };
}

/// Create an alias backfill span.
#[macro_export]
macro_rules! backfill_span {
    ($alias_count:expr) => {
        tracing::debug_span!("shroud.backfill", alias_count = $alias_count)
    };
}

/// Create an evaluation span.
#[macro_export]
macro_rules! eval_span {
    ($case_count:expr, $threshold:expr) => {
        tracing::info_span!("shroud.eval", case_count = $case_count, threshold = $threshold)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const MASK: &str = "shroud.mask";
    pub const BACKFILL: &str = "shroud.backfill";
    pub const EVAL: &str = "shroud.eval";
}
