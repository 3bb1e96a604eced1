use serde::{Deserialize, Serialize};
use shroud_core::errors::ShroudResult;
use shroud_core::traits::IRecognizer;
use shroud_core::types::RecognizedEntity;

use crate::{is_requested, requested_labels};

/// One gazetteer entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseEntry {
    pub phrase: String,
    pub label: String,
    pub score: f64,
}

/// Gazetteer recognizer: emits every exact, case-sensitive occurrence of each
/// known phrase. Overlapping entries are all reported.
#[derive(Debug, Clone, Default)]
pub struct PhraseRecognizer {
    entries: Vec<PhraseEntry>,
}

impl PhraseRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<PhraseEntry>) -> Self {
        Self { entries }
    }

    /// Builder-style registration.
    pub fn with_phrase(mut self, phrase: impl Into<String>, label: impl Into<String>, score: f64) -> Self {
        self.add(phrase, label, score);
        self
    }

    pub fn add(&mut self, phrase: impl Into<String>, label: impl Into<String>, score: f64) {
        self.entries.push(PhraseEntry {
            phrase: phrase.into(),
            label: label.into(),
            score,
        });
    }

    pub fn entries(&self) -> &[PhraseEntry] {
        &self.entries
    }
}

impl IRecognizer for PhraseRecognizer {
    fn name(&self) -> &str {
        "phrase"
    }

    fn detect(
        &self,
        text: &str,
        labels: &[String],
        threshold: f64,
    ) -> ShroudResult<Vec<RecognizedEntity>> {
        let requested = requested_labels(labels);
        let mut found = Vec::new();
        for entry in &self.entries {
            if entry.phrase.is_empty()
                || entry.score < threshold
                || !is_requested(&requested, &entry.label)
            {
                continue;
            }
            for (start, matched) in text.match_indices(entry.phrase.as_str()) {
                found.push(RecognizedEntity::new(
                    start,
                    start + matched.len(),
                    entry.label.clone(),
                    entry.score,
                ));
            }
        }
        found.sort_by_key(|e| (e.start, e.end));
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn finds_every_occurrence() {
        let recognizer = PhraseRecognizer::new().with_phrase("Ann", "person", 0.8);
        let found = recognizer.detect("Ann met Ann", &labels(&["person"]), 0.5).unwrap();
        let starts: Vec<usize> = found.iter().map(|e| e.start).collect();
        assert_eq!(starts, vec![0, 8]);
    }

    #[test]
    fn filters_by_label_and_threshold() {
        let recognizer = PhraseRecognizer::new()
            .with_phrase("Acme Ltd", "organization", 0.9)
            .with_phrase("Leeds", "location", 0.4);
        let text = "Acme Ltd of Leeds";
        assert!(recognizer.detect(text, &labels(&["person"]), 0.0).unwrap().is_empty());
        let found = recognizer
            .detect(text, &labels(&["Organization", "location"]), 0.5)
            .unwrap();
        assert_eq!(found, vec![RecognizedEntity::new(0, 8, "organization", 0.9)]);
    }

    #[test]
    fn entries_deserialize_from_json() {
        let entries: Vec<PhraseEntry> =
            serde_json::from_str(r#"[{"phrase":"Bo","label":"name","score":0.7}]"#).unwrap();
        assert_eq!(PhraseRecognizer::from_entries(entries).entries().len(), 1);
    }
}
