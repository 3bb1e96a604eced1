//! Parallel evaluation of a bundle through a masker.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use shroud_core::config::ScoringConfig;
use shroud_core::errors::ShroudResult;
use shroud_core::traits::{IMasker, IRecognizer};
use shroud_observability::{eval_span, events};

use crate::bundle::{EvalBundle, EvalCase};
use crate::scorer::{score_typed, ScoreReport};

/// Result of one case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    pub id: String,
    pub report: ScoreReport,
    pub masked_text: String,
}

/// Per-case reports in bundle order plus their macro average.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub cases: Vec<CaseReport>,
    /// Rates averaged over cases; counts summed.
    pub average: ScoreReport,
}

impl SuiteReport {
    fn from_cases(cases: Vec<CaseReport>) -> Self {
        let average = macro_average(cases.iter().map(|c| &c.report));
        Self { cases, average }
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Text report: one block per case followed by the `AVG` line.
    pub fn render(&self, fp_top_k: usize) -> String {
        let mut lines: Vec<String> = self
            .cases
            .iter()
            .map(|c| c.report.render(&c.id, Some(fp_top_k)))
            .collect();
        lines.push(self.average.render("AVG", None));
        lines.join("\n")
    }
}

fn macro_average<'a>(reports: impl Iterator<Item = &'a ScoreReport>) -> ScoreReport {
    let mut sum = ScoreReport::default();
    let mut n = 0usize;
    let mut fp_by_type: BTreeMap<String, usize> = BTreeMap::new();
    for r in reports {
        n += 1;
        sum.recall += r.recall;
        sum.type_accuracy += r.type_accuracy;
        sum.overall += r.overall;
        sum.found_count += r.found_count;
        sum.expected_count += r.expected_count;
        sum.matched_count += r.matched_count;
        sum.false_positives_total += r.false_positives_total;
        for (label, count) in &r.false_positives_by_type {
            *fp_by_type.entry(label.clone()).or_insert(0) += count;
        }
    }
    if n > 0 {
        let n = n as f64;
        sum.recall /= n;
        sum.type_accuracy /= n;
        sum.overall /= n;
    }
    sum.false_positives_by_type = fp_by_type;
    sum
}

/// Runs evaluation bundles with a fixed scoring configuration.
#[derive(Debug, Clone, Default)]
pub struct SuiteRunner {
    config: ScoringConfig,
    limit: Option<usize>,
}

impl SuiteRunner {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            limit: None,
        }
    }

    /// Only run the first `limit` cases.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Mask and score every case. Cases run in parallel; reports come back in
    /// bundle order. The first masking error aborts the suite.
    pub fn run(
        &self,
        masker: &dyn IMasker,
        recognizer: &dyn IRecognizer,
        bundle: &EvalBundle,
    ) -> ShroudResult<SuiteReport> {
        let count = self
            .limit
            .map_or(bundle.len(), |limit| limit.min(bundle.len()));
        let cases = &bundle.tests[..count];
        let _span = eval_span!(count, self.config.similarity_threshold).entered();

        let reports = cases
            .par_iter()
            .map(|case| self.run_case(masker, recognizer, case))
            .collect::<ShroudResult<Vec<_>>>()?;

        let suite = SuiteReport::from_cases(reports);
        tracing::info!(
            cases = suite.len(),
            recall = suite.average.recall,
            type_accuracy = suite.average.type_accuracy,
            overall = suite.average.overall,
            "evaluation complete"
        );
        Ok(suite)
    }

    fn run_case(
        &self,
        masker: &dyn IMasker,
        recognizer: &dyn IRecognizer,
        case: &EvalCase,
    ) -> ShroudResult<CaseReport> {
        let output = masker.mask(&case.text, recognizer)?;
        let report = score_typed(&output.mapping, &case.expected_typed, &self.config);
        events::eval_case_scored(
            &case.id,
            report.recall,
            report.type_accuracy,
            report.false_positives_total,
        );
        Ok(CaseReport {
            id: case.id.clone(),
            report,
            masked_text: output.masked_text,
        })
    }
}

/// Run a bundle with `config`, optionally truncated to `limit` cases.
pub fn run_suite(
    masker: &dyn IMasker,
    recognizer: &dyn IRecognizer,
    bundle: &EvalBundle,
    config: &ScoringConfig,
    limit: Option<usize>,
) -> ShroudResult<SuiteReport> {
    SuiteRunner::new(config.clone())
        .with_limit(limit)
        .run(masker, recognizer, bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(recall: f64, type_accuracy: f64, fp: usize) -> ScoreReport {
        ScoreReport {
            recall,
            type_accuracy,
            overall: recall * type_accuracy,
            found_count: 2,
            expected_count: 1,
            matched_count: 1,
            false_positives_total: fp,
            false_positives_by_type: BTreeMap::from([("DATE".to_string(), fp)]),
        }
    }

    #[test]
    fn average_is_macro_over_cases() {
        let a = report(1.0, 1.0, 1);
        let b = report(0.5, 0.0, 2);
        let avg = macro_average([&a, &b].into_iter());
        assert_eq!(avg.recall, 0.75);
        assert_eq!(avg.type_accuracy, 0.5);
        assert_eq!(avg.overall, 0.5);
        assert_eq!(avg.false_positives_total, 3);
        assert_eq!(avg.found_count, 4);
        assert_eq!(avg.false_positives_by_type["DATE"], 3);
    }

    #[test]
    fn empty_average_is_zero() {
        let avg = macro_average(std::iter::empty());
        assert_eq!(avg, ScoreReport::default());
    }

    #[test]
    fn avg_line_omits_fp_breakdown() {
        let suite = SuiteReport::from_cases(vec![CaseReport {
            id: "c1".to_string(),
            report: report(1.0, 1.0, 1),
            masked_text: String::new(),
        }]);
        let text = suite.render(12);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("   FP by type: DATE:1"));
        assert!(lines[2].starts_with("AVG        | Recall: 100.0%"));
    }
}
