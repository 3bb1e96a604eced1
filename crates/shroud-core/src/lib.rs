//! # shroud-core
//!
//! Foundation crate for the shroud PII span engine.
//! Defines the canonical taxonomy, span and tag types, the recognizer and
//! masker traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::ShroudConfig;
pub use errors::{ShroudError, ShroudResult};
pub use types::{
    CanonicalType, Mapping, MaskOutput, PersonAliasIndex, PlaceholderTag, RecognizedEntity,
    ScoreTable, Span, SpanSource, TaggedSpan,
};
