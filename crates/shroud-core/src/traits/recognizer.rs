use crate::errors::ShroudResult;
use crate::types::RecognizedEntity;

/// External entity recognizer.
///
/// The engine treats implementations as untrusted oracles: labels outside the
/// taxonomy are dropped, offsets are validated, duplicates and overlaps are
/// resolved downstream, and a missing score counts as 0.0.
pub trait IRecognizer: Send + Sync {
    /// Human-readable identifier (e.g. "fixed", "phrase", a model name).
    fn name(&self) -> &str;

    /// Detect candidate entities in `text` for the given label vocabulary.
    fn detect(
        &self,
        text: &str,
        labels: &[String],
        threshold: f64,
    ) -> ShroudResult<Vec<RecognizedEntity>>;
}
