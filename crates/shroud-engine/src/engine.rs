use shroud_core::config::MaskingConfig;
use shroud_core::errors::ShroudResult;
use shroud_core::traits::{IMasker, IRecognizer};
use shroud_core::types::{MaskOutput, PersonAliasIndex, RecognizedEntity};
use shroud_observability::{events, mask_span};

use crate::degradation::DegradationTracker;
use crate::intake::canonicalize;
use crate::merge::merge_adjacent_persons;
use crate::overlap::resolve_overlaps;
use crate::patterns::{self, PatternLimits};
use crate::rewrite::rewrite;
use crate::tagging::TagAssigner;

/// The span engine: fuses recognizer candidates with pattern detections,
/// resolves overlaps, tags and rewrites.
///
/// Stateless across runs apart from an explicitly threaded
/// [`PersonAliasIndex`], so one engine can serve many threads.
pub struct MaskingEngine {
    config: MaskingConfig,
    limits: PatternLimits,
    health: DegradationTracker,
}

impl MaskingEngine {
    pub fn new() -> Self {
        Self::with_config(MaskingConfig::default())
    }

    pub fn with_config(config: MaskingConfig) -> Self {
        let limits = PatternLimits::from_config(&config);
        Self {
            config,
            limits,
            health: patterns::pattern_health(),
        }
    }

    pub fn config(&self) -> &MaskingConfig {
        &self.config
    }

    /// Detector regexes that failed to compile when the engine was built.
    pub fn pattern_health(&self) -> &DegradationTracker {
        &self.health
    }

    /// Mask with the configured labels and threshold and a fresh alias index.
    pub fn mask(&self, text: &str, recognizer: &dyn IRecognizer) -> ShroudResult<MaskOutput> {
        self.mask_with_aliases(text, recognizer, &mut PersonAliasIndex::new())
    }

    /// Mask with an explicit label vocabulary and recognizer threshold.
    pub fn mask_with(
        &self,
        text: &str,
        recognizer: &dyn IRecognizer,
        labels: &[String],
        threshold: f64,
    ) -> ShroudResult<MaskOutput> {
        self.run(text, recognizer, labels, threshold, &mut PersonAliasIndex::new())
    }

    /// Mask while threading person identity through `index`, so a name seen
    /// in an earlier turn keeps its tag.
    pub fn mask_with_aliases(
        &self,
        text: &str,
        recognizer: &dyn IRecognizer,
        index: &mut PersonAliasIndex,
    ) -> ShroudResult<MaskOutput> {
        self.run(
            text,
            recognizer,
            &self.config.labels,
            self.config.threshold,
            index,
        )
    }

    fn run(
        &self,
        text: &str,
        recognizer: &dyn IRecognizer,
        labels: &[String],
        threshold: f64,
        index: &mut PersonAliasIndex,
    ) -> ShroudResult<MaskOutput> {
        if text.is_empty() {
            return Ok(MaskOutput::empty());
        }
        let _span = mask_span!(text.len(), recognizer.name()).entered();
        let candidates = recognizer.detect(text, labels, threshold)?;
        Ok(self.mask_entities(text, &candidates, index))
    }

    /// Mask using pre-fetched recognizer candidates. Total: bad candidates
    /// are dropped, never reported as errors.
    pub fn mask_entities(
        &self,
        text: &str,
        candidates: &[RecognizedEntity],
        index: &mut PersonAliasIndex,
    ) -> MaskOutput {
        if text.is_empty() {
            return MaskOutput::empty();
        }

        let mut spans = canonicalize(text, candidates);
        spans.extend(patterns::detect_patterns_with(text, &self.limits));
        let spans = merge_adjacent_persons(
            text,
            spans,
            self.config.merge_max_run,
            self.config.merge_max_gap,
        );
        let resolved = resolve_overlaps(spans);

        let mut assigner = TagAssigner::new(index, self.config.alias_min_letters);
        let mut tagged = assigner.assign(resolved);
        let backfilled = if self.config.alias_backfill {
            assigner.backfill(text, &mut tagged)
        } else {
            0
        };
        let (mapping, scores) = assigner.finish();

        let masked_text = rewrite(text, &tagged);
        events::mask_completed(tagged.len(), mapping.len(), backfilled);

        MaskOutput {
            masked_text,
            mapping,
            scores,
            spans: tagged,
        }
    }
}

impl Default for MaskingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IMasker for MaskingEngine {
    fn mask(&self, text: &str, recognizer: &dyn IRecognizer) -> ShroudResult<MaskOutput> {
        MaskingEngine::mask(self, text, recognizer)
    }
}

/// Mask `text` with default settings.
pub fn mask(text: &str, recognizer: &dyn IRecognizer) -> ShroudResult<MaskOutput> {
    MaskingEngine::new().mask(text, recognizer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shroud_core::errors::{RecognizerError, ShroudError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: AtomicUsize,
        entities: Vec<RecognizedEntity>,
    }

    impl IRecognizer for Counting {
        fn name(&self) -> &str {
            "counting"
        }

        fn detect(&self, _: &str, _: &[String], _: f64) -> ShroudResult<Vec<RecognizedEntity>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.entities.clone())
        }
    }

    struct Broken;

    impl IRecognizer for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn detect(&self, _: &str, _: &[String], _: f64) -> ShroudResult<Vec<RecognizedEntity>> {
            Err(RecognizerError::DetectionFailed {
                reason: "model offline".into(),
            }
            .into())
        }
    }

    #[test]
    fn empty_text_skips_recognizer() {
        let recognizer = Counting {
            calls: AtomicUsize::new(0),
            entities: Vec::new(),
        };
        let out = mask("", &recognizer).unwrap();
        assert_eq!(out, MaskOutput::empty());
        assert_eq!(recognizer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn recognizer_errors_propagate() {
        let err = mask("anything", &Broken).unwrap_err();
        assert!(matches!(err, ShroudError::RecognizerError(_)));
    }

    #[test]
    fn backfill_can_be_disabled() {
        let text = "John Smith wrote. Later, John confirmed.";
        let engine = MaskingEngine::with_config(MaskingConfig {
            alias_backfill: false,
            ..MaskingConfig::default()
        });
        let out = engine.mask_entities(
            text,
            &[RecognizedEntity::new(0, 10, "person", 0.9)],
            &mut PersonAliasIndex::new(),
        );
        assert_eq!(out.masked_text, "[PERSON_1] wrote. Later, John confirmed.");
    }

    #[test]
    fn engine_reports_healthy_patterns() {
        assert!(!MaskingEngine::new().pattern_health().has_failures());
    }
}
