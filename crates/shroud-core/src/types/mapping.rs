use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::PlaceholderTag;

/// Association between placeholder tags and the surface form they replaced.
///
/// Each tag holds exactly one original: the first surface form seen for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping {
    entries: BTreeMap<PlaceholderTag, String>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `original` for `tag` unless the tag already has one.
    /// Returns whether the entry was inserted.
    pub fn insert_first(&mut self, tag: PlaceholderTag, original: impl Into<String>) -> bool {
        if self.entries.contains_key(&tag) {
            return false;
        }
        self.entries.insert(tag, original.into());
        true
    }

    pub fn get(&self, tag: &PlaceholderTag) -> Option<&str> {
        self.entries.get(tag).map(String::as_str)
    }

    pub fn contains(&self, tag: &PlaceholderTag) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlaceholderTag, &str)> {
        self.entries.iter().map(|(tag, v)| (tag, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered `"[LABEL_N]" -> original` view.
    pub fn to_string_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(tag, v)| (tag.to_string(), v.clone()))
            .collect()
    }
}

/// Per-tag confidence: the maximum adjusted score over every span collapsed
/// into the tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreTable {
    entries: BTreeMap<PlaceholderTag, f64>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the larger of the existing and the offered score.
    pub fn record_max(&mut self, tag: PlaceholderTag, score: f64) {
        let entry = self.entries.entry(tag).or_insert(score);
        if score > *entry {
            *entry = score;
        }
    }

    pub fn get(&self, tag: &PlaceholderTag) -> Option<f64> {
        self.entries.get(tag).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlaceholderTag, f64)> {
        self.entries.iter().map(|(tag, s)| (tag, *s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
