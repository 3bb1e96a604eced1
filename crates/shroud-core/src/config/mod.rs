//! Workspace configuration, loadable from TOML. Every section falls back to
//! the values in [`defaults`] for missing keys.

pub mod defaults;
mod masking_config;
mod observability_config;
mod recognizer_config;
mod scoring_config;

pub use masking_config::MaskingConfig;
pub use observability_config::ObservabilityConfig;
pub use recognizer_config::RecognizerConfig;
pub use scoring_config::ScoringConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ShroudResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShroudConfig {
    pub masking: MaskingConfig,
    pub scoring: ScoringConfig,
    pub recognizer: RecognizerConfig,
    pub observability: ObservabilityConfig,
}

impl ShroudConfig {
    /// Parse a TOML document. Missing sections and keys keep their defaults.
    pub fn from_toml(source: &str) -> ShroudResult<Self> {
        let config: Self = toml::from_str(source).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit("masking.threshold", self.masking.threshold)?;
        check_unit("scoring.similarity_threshold", self.scoring.similarity_threshold)?;
        if self.masking.address_max_lines == 0 {
            return Err(ConfigError::InvalidValue {
                key: "masking.address_max_lines".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.masking.merge_max_run == 0 {
            return Err(ConfigError::InvalidValue {
                key: "masking.merge_max_run".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

fn check_unit(key: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            key: key.into(),
            reason: format!("{value} is outside [0, 1]"),
        })
    }
}
