use serde::{Deserialize, Serialize};

use super::{Mapping, PlaceholderTag, ScoreTable, Span};

/// A final span annotated with the tag that replaced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedSpan {
    #[serde(flatten)]
    pub span: Span,
    pub tag: PlaceholderTag,
}

/// Result of one masking run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaskOutput {
    pub masked_text: String,
    pub mapping: Mapping,
    pub scores: ScoreTable,
    /// Every replaced span, ascending by start.
    pub spans: Vec<TaggedSpan>,
}

impl MaskOutput {
    /// The output for empty input: `("", {}, {}, [])`.
    pub fn empty() -> Self {
        Self::default()
    }
}
