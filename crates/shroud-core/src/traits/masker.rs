use crate::errors::ShroudResult;
use crate::traits::IRecognizer;
use crate::types::MaskOutput;

/// PII masking over a single text.
pub trait IMasker: Send + Sync {
    /// Mask `text`, consulting `recognizer` for candidate entities.
    fn mask(&self, text: &str, recognizer: &dyn IRecognizer) -> ShroudResult<MaskOutput>;
}
