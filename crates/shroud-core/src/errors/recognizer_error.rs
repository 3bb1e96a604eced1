/// Errors raised at the recognizer boundary.
#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    #[error("recognizer '{name}' unavailable: {reason}")]
    Unavailable { name: String, reason: String },

    #[error("detection failed: {reason}")]
    DetectionFailed { reason: String },
}
