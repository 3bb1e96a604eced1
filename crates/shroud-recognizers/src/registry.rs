//! Explicit recognizer cache owned by the integration layer.
//!
//! Loading a recognizer (a model, a large gazetteer) can be expensive, so
//! integrations share instances through this registry. The span engine never
//! consults it.

use std::sync::Arc;

use moka::sync::Cache;
use shroud_core::config::RecognizerConfig;
use shroud_core::errors::{RecognizerError, ShroudResult};
use shroud_core::traits::IRecognizer;

/// Bounded `name → recognizer` cache with get-or-create semantics.
pub struct RecognizerRegistry {
    cache: Cache<String, Arc<dyn IRecognizer>>,
}

impl RecognizerRegistry {
    pub fn new(capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(capacity).build(),
        }
    }

    pub fn from_config(config: &RecognizerConfig) -> Self {
        Self::new(config.registry_capacity)
    }

    /// Return the recognizer registered under `name`, building it with
    /// `factory` on first use. Concurrent callers for the same name share a
    /// single factory call. A failing factory is not cached and surfaces as
    /// `RecognizerError::Unavailable`.
    pub fn get_or_create<F>(&self, name: &str, factory: F) -> ShroudResult<Arc<dyn IRecognizer>>
    where
        F: FnOnce() -> ShroudResult<Arc<dyn IRecognizer>>,
    {
        self.cache
            .try_get_with(name.to_string(), factory)
            .map_err(|err| {
                tracing::warn!(recognizer = %name, error = %err, "recognizer factory failed");
                RecognizerError::Unavailable {
                    name: name.to_string(),
                    reason: err.to_string(),
                }
                .into()
            })
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn IRecognizer>> {
        self.cache.get(name)
    }

    pub fn insert(&self, name: impl Into<String>, recognizer: Arc<dyn IRecognizer>) {
        self.cache.insert(name.into(), recognizer);
    }

    pub fn remove(&self, name: &str) {
        self.cache.invalidate(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cache.contains_key(name)
    }

    /// Number of cached recognizers. Eventually consistent.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl Default for RecognizerRegistry {
    fn default() -> Self {
        Self::from_config(&RecognizerConfig::default())
    }
}
