//! Pattern health for the detectors.
//!
//! A detector regex that fails to compile is skipped; the engine keeps
//! masking with the rest and this tracker records the gap.

/// A detector regex that is unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternFailure {
    pub pattern_name: String,
    pub detector: String,
    pub error: String,
}

#[derive(Debug, Clone, Default)]
pub struct DegradationTracker {
    failures: Vec<PatternFailure>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_failure(&mut self, pattern_name: &str, detector: &str, error: &str) {
        self.failures.push(PatternFailure {
            pattern_name: pattern_name.to_string(),
            detector: detector.to_string(),
            error: error.to_string(),
        });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failures(&self) -> &[PatternFailure] {
        &self.failures
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}
