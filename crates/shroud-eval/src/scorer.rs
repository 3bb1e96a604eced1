//! Typed scoring of one masking run against expected values.
//!
//! Each expected `(type, value)` pair claims at most one found pair: the
//! unmatched found value with the highest similarity, first one on ties.
//! A claim counts when its similarity reaches the threshold; it is
//! type-correct when the labels agree.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use shroud_core::config::ScoringConfig;
use shroud_core::types::Mapping;

use crate::bundle::ExpectedTyped;
use crate::similarity::match_score;

/// Metrics for one case. Rates are fractions in `[0, 1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub recall: f64,
    pub type_accuracy: f64,
    pub overall: f64,
    pub found_count: usize,
    pub expected_count: usize,
    pub matched_count: usize,
    pub false_positives_total: usize,
    pub false_positives_by_type: BTreeMap<String, usize>,
}

impl ScoreReport {
    /// False-positive buckets by count descending, then type, at most `top_k`.
    pub fn top_false_positives(&self, top_k: usize) -> Vec<(&str, usize)> {
        let mut items: Vec<(&str, usize)> = self
            .false_positives_by_type
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        items.truncate(top_k);
        items
    }

    /// One summary line, plus a false-positive breakdown line when
    /// `fp_top_k` is given and there are false positives.
    pub fn render(&self, name: &str, fp_top_k: Option<usize>) -> String {
        let mut out = format!(
            "{name:<10} | Recall: {:.1}% | TypeAcc: {:.1}% | Overall: {:.1}% | FP: {} (found {}, expected {})",
            self.recall * 100.0,
            self.type_accuracy * 100.0,
            self.overall * 100.0,
            self.false_positives_total,
            self.found_count,
            self.expected_count,
        );
        if let Some(top_k) = fp_top_k {
            if self.false_positives_total > 0 {
                let buckets: Vec<String> = self
                    .top_false_positives(top_k)
                    .into_iter()
                    .map(|(label, count)| format!("{label}:{count}"))
                    .collect();
                let _ = write!(out, "\n   FP by type: {}", buckets.join(", "));
            }
        }
        out
    }
}

/// Found `(type, value)` pairs, deduplicated per type, in tag order.
pub fn found_pairs(mapping: &Mapping) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = Vec::with_capacity(mapping.len());
    for (tag, original) in mapping.iter() {
        let label = tag.label().as_str();
        if !pairs.iter().any(|(l, v)| l == label && v == original) {
            pairs.push((label.to_string(), original.to_string()));
        }
    }
    pairs
}

/// Score a mapping against the expected values of one case.
pub fn score_typed(mapping: &Mapping, expected: &ExpectedTyped, config: &ScoringConfig) -> ScoreReport {
    let found = found_pairs(mapping);
    let expected_pairs: Vec<(&str, &str)> = expected
        .iter()
        .flat_map(|(label, values)| values.iter().map(move |v| (label, v.as_str())))
        .collect();

    let mut claimed = vec![false; found.len()];
    let mut matched = 0usize;
    let mut type_correct = 0usize;

    for (exp_label, exp_value) in &expected_pairs {
        let mut best: Option<(usize, f64)> = None;
        for (j, (_, found_value)) in found.iter().enumerate() {
            if claimed[j] {
                continue;
            }
            let score = match_score(exp_value, found_value, config.containment_min_chars);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((j, score));
            }
        }
        if let Some((j, score)) = best {
            if score >= config.similarity_threshold {
                claimed[j] = true;
                matched += 1;
                if found[j].0 == *exp_label {
                    type_correct += 1;
                }
            }
        }
    }

    let mut false_positives_by_type: BTreeMap<String, usize> = BTreeMap::new();
    for ((label, _), used) in found.iter().zip(&claimed) {
        if !used {
            *false_positives_by_type.entry(label.clone()).or_insert(0) += 1;
        }
    }

    let recall = matched as f64 / expected_pairs.len().max(1) as f64;
    let type_accuracy = if matched > 0 {
        type_correct as f64 / matched as f64
    } else {
        0.0
    };

    ScoreReport {
        recall,
        type_accuracy,
        overall: recall * type_accuracy,
        found_count: found.len(),
        expected_count: expected_pairs.len(),
        matched_count: matched,
        false_positives_total: found.len() - matched,
        false_positives_by_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shroud_core::types::{CanonicalType, PlaceholderTag};

    fn mapping(entries: &[(CanonicalType, u32, &str)]) -> Mapping {
        let mut m = Mapping::new();
        for (label, ordinal, value) in entries {
            m.insert_first(PlaceholderTag::new(*label, *ordinal), *value);
        }
        m
    }

    fn expected(entries: &[(&str, &[&str])]) -> ExpectedTyped {
        entries
            .iter()
            .map(|(l, vs)| (l.to_string(), vs.iter().map(|v| v.to_string()).collect()))
            .collect()
    }

    #[test]
    fn perfect_run() {
        let m = mapping(&[
            (CanonicalType::Person, 1, "John Smith"),
            (CanonicalType::EmailAddress, 1, "john@example.com"),
        ]);
        let e = expected(&[("PERSON", &["John Smith"]), ("EMAIL_ADDRESS", &["john@example.com"])]);
        let r = score_typed(&m, &e, &ScoringConfig::default());
        assert_eq!(r.recall, 1.0);
        assert_eq!(r.type_accuracy, 1.0);
        assert_eq!(r.overall, 1.0);
        assert_eq!(r.false_positives_total, 0);
    }

    #[test]
    fn wrong_type_still_counts_for_recall() {
        let m = mapping(&[(CanonicalType::Org, 1, "Acme Bank")]);
        let e = expected(&[("PERSON", &["Acme Bank"])]);
        let r = score_typed(&m, &e, &ScoringConfig::default());
        assert_eq!(r.recall, 1.0);
        assert_eq!(r.type_accuracy, 0.0);
        assert_eq!(r.overall, 0.0);
    }

    #[test]
    fn expected_types_claim_in_listed_order() {
        let m = mapping(&[(CanonicalType::Org, 1, "Acme Bank")]);

        let person_first = expected(&[("PERSON", &["Acme Bank"]), ("ORG", &["Acme Bank"])]);
        let r = score_typed(&m, &person_first, &ScoringConfig::default());
        assert_eq!(r.recall, 0.5);
        assert_eq!(r.type_accuracy, 0.0);

        let org_first = expected(&[("ORG", &["Acme Bank"]), ("PERSON", &["Acme Bank"])]);
        let r = score_typed(&m, &org_first, &ScoringConfig::default());
        assert_eq!(r.recall, 0.5);
        assert_eq!(r.type_accuracy, 1.0);
    }

    #[test]
    fn unmatched_found_values_are_false_positives() {
        let m = mapping(&[
            (CanonicalType::Person, 1, "Ada"),
            (CanonicalType::Date, 1, "Monday"),
            (CanonicalType::Date, 2, "Tuesday"),
            (CanonicalType::Location, 1, "Leeds"),
        ]);
        let e = expected(&[("PERSON", &["Ada"])]);
        let r = score_typed(&m, &e, &ScoringConfig::default());
        assert_eq!(r.false_positives_total, 3);
        assert_eq!(r.false_positives_by_type["DATE"], 2);
        assert_eq!(
            r.top_false_positives(12),
            vec![("DATE", 2), ("LOCATION", 1)]
        );
    }

    #[test]
    fn each_found_value_is_claimed_once() {
        let m = mapping(&[(CanonicalType::Person, 1, "Ada Lovelace")]);
        let e = expected(&[("PERSON", &["Ada Lovelace", "A. Lovelace"])]);
        let r = score_typed(&m, &e, &ScoringConfig::default());
        assert_eq!(r.matched_count, 1);
        assert_eq!(r.recall, 0.5);
    }

    #[test]
    fn nothing_expected_nothing_found() {
        let r = score_typed(&Mapping::new(), &ExpectedTyped::new(), &ScoringConfig::default());
        assert_eq!(r.recall, 0.0);
        assert_eq!(r.type_accuracy, 0.0);
        assert_eq!(r.found_count, 0);
    }

    #[test]
    fn duplicate_found_values_collapse_per_type() {
        let m = mapping(&[
            (CanonicalType::Person, 1, "Ada"),
            (CanonicalType::Person, 2, "Ada"),
            (CanonicalType::Org, 1, "Ada"),
        ]);
        assert_eq!(found_pairs(&m).len(), 2);
    }

    #[test]
    fn render_matches_report_layout() {
        let m = mapping(&[
            (CanonicalType::Person, 1, "John Smith"),
            (CanonicalType::Date, 1, "Monday"),
        ]);
        let e = expected(&[("PERSON", &["John Smith"])]);
        let r = score_typed(&m, &e, &ScoringConfig::default());
        assert_eq!(
            r.render("case-1", Some(12)),
            "case-1     | Recall: 100.0% | TypeAcc: 100.0% | Overall: 100.0% | FP: 1 (found 2, expected 1)\n   FP by type: DATE:1"
        );
        assert!(!r.render("case-1", None).contains("FP by type"));
    }
}
