use serde::{Deserialize, Serialize};

use super::defaults;

/// Recognizer registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    /// Maximum recognizer instances kept alive by the registry.
    pub registry_capacity: u64,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            registry_capacity: defaults::DEFAULT_REGISTRY_CAPACITY,
        }
    }
}
