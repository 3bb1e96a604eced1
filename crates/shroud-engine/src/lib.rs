//! # shroud-engine
//!
//! The PII span engine. Recognizer candidates and deterministic pattern
//! detections are fused, adjacent person fragments merged, overlaps resolved
//! by priority, placeholders assigned (with person aliasing and backfill)
//! and the text rewritten.
//!
//! Pipeline: intake → patterns → merge → overlap → tagging → rewrite.

pub mod degradation;
pub mod engine;
pub mod intake;
pub mod merge;
pub mod normalize;
pub mod overlap;
pub mod patterns;
pub mod rewrite;
pub mod tagging;
pub mod validators;

pub use engine::{mask, MaskingEngine};
pub use normalize::normalize;
pub use overlap::resolve_overlaps;
pub use patterns::{detect_patterns, detect_patterns_with, PatternLimits};
pub use rewrite::{rewrite, unmask};
pub use validators::adjust_score;
