//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields. Events never
//! carry matched text, only counts and labels.

/// Log recognizer candidates discarded at intake.
pub fn recognizer_candidates_dropped(unknown_label: usize, bad_offsets: usize) {
    tracing::debug!(
        event = "recognizer_candidates_dropped",
        unknown_label = unknown_label,
        bad_offsets = bad_offsets,
        "dropped recognizer candidates"
    );
}

/// Log a detector pattern that could not be compiled.
pub fn pattern_degraded(pattern_name: &str, detector: &str) {
    tracing::warn!(
        event = "pattern_degraded",
        pattern = %pattern_name,
        detector = %detector,
        "pattern unavailable, detector running without it"
    );
}

/// Log the outcome of a masking run.
pub fn mask_completed(spans: usize, tags: usize, backfilled: usize) {
    tracing::info!(
        event = "mask_completed",
        spans = spans,
        tags = tags,
        backfilled = backfilled,
        "masking complete"
    );
}

/// Log one scored evaluation case.
pub fn eval_case_scored(case_id: &str, recall: f64, type_accuracy: f64, false_positives: usize) {
    tracing::debug!(
        event = "eval_case_scored",
        case_id = %case_id,
        recall = recall,
        type_accuracy = type_accuracy,
        false_positives = false_positives,
        "evaluation case scored"
    );
}
