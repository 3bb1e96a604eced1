//! Error stack: one sub-enum per fallible edge, aggregated by [`ShroudError`].

mod config_error;
mod eval_error;
mod recognizer_error;

pub use config_error::ConfigError;
pub use eval_error::EvalError;
pub use recognizer_error::RecognizerError;

/// Top-level error for every fallible shroud operation.
///
/// The span engine itself is total; errors only come from the recognizer
/// boundary, configuration parsing and evaluation I/O.
#[derive(Debug, thiserror::Error)]
pub enum ShroudError {
    #[error("recognizer error: {0}")]
    RecognizerError(#[from] RecognizerError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("evaluation error: {0}")]
    EvalError(#[from] EvalError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience alias used throughout the workspace.
pub type ShroudResult<T> = Result<T, ShroudError>;
