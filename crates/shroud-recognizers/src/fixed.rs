use shroud_core::errors::ShroudResult;
use shroud_core::traits::IRecognizer;
use shroud_core::types::RecognizedEntity;

use crate::{is_requested, requested_labels};

/// Replays a fixed candidate list regardless of the text.
///
/// Candidates outside the requested label vocabulary or below the threshold
/// are withheld, like a real model would. A missing score counts as 0.0.
#[derive(Debug, Clone)]
pub struct FixedRecognizer {
    name: String,
    entities: Vec<RecognizedEntity>,
}

impl FixedRecognizer {
    pub fn new(entities: Vec<RecognizedEntity>) -> Self {
        Self::named("fixed", entities)
    }

    pub fn named(name: impl Into<String>, entities: Vec<RecognizedEntity>) -> Self {
        Self {
            name: name.into(),
            entities,
        }
    }

    /// A recognizer that never finds anything.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl IRecognizer for FixedRecognizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn detect(
        &self,
        _text: &str,
        labels: &[String],
        threshold: f64,
    ) -> ShroudResult<Vec<RecognizedEntity>> {
        let requested = requested_labels(labels);
        Ok(self
            .entities
            .iter()
            .filter(|e| is_requested(&requested, &e.label))
            .filter(|e| e.score.unwrap_or(0.0) >= threshold)
            .cloned()
            .collect())
    }
}
