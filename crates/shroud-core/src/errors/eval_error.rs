/// Evaluation bundle errors.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("could not find evaluation bundle at {path}")]
    BundleNotFound { path: String },

    #[error("unexpected bundle format in {path}: {reason}")]
    MalformedBundle { path: String, reason: String },
}
