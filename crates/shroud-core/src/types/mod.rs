pub mod alias;
pub mod canonical;
pub mod mapping;
pub mod output;
pub mod span;
pub mod tag;

pub use alias::{PersonAliasIndex, PersonRecord};
pub use canonical::{CanonicalType, ChecksumRule, NormalForm};
pub use mapping::{Mapping, ScoreTable};
pub use output::{MaskOutput, TaggedSpan};
pub use span::{clamp_score, RecognizedEntity, Span, SpanSource};
pub use tag::PlaceholderTag;
