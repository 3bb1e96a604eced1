//! Evaluation bundle: `{ "tests": [ { "id", "text", "expected_typed" } ] }`.

use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use shroud_core::constants::MISSING_CASE_ID;
use shroud_core::errors::{EvalError, ShroudResult};

/// Expected values per canonical type name.
///
/// Labels keep the order they were first seen in and values are deduplicated
/// in input order. The scorer claims found entries in exactly this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpectedTyped {
    entries: Vec<(String, Vec<String>)>,
}

impl ExpectedTyped {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` under `label`, ignoring exact duplicates.
    pub fn push(&mut self, label: &str, value: impl Into<String>) {
        let value = value.into();
        let values = self.values_mut(label);
        if !values.contains(&value) {
            values.push(value);
        }
    }

    /// Replace the values of `label`. An existing label keeps its position.
    pub fn insert(&mut self, label: impl Into<String>, values: Vec<String>) {
        let label = label.into();
        let mut kept: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            if !kept.contains(&value) {
                kept.push(value);
            }
        }
        *self.values_mut(&label) = kept;
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, values)| values.as_slice())
    }

    /// Labels with their values, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(label, values)| (label.as_str(), values.as_slice()))
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of expected (label, value) pairs.
    pub fn pair_count(&self) -> usize {
        self.entries.iter().map(|(_, values)| values.len()).sum()
    }

    fn values_mut(&mut self, label: &str) -> &mut Vec<String> {
        let idx = match self.entries.iter().position(|(l, _)| l == label) {
            Some(idx) => idx,
            None => {
                self.entries.push((label.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }
}

impl<L: Into<String>> FromIterator<(L, Vec<String>)> for ExpectedTyped {
    fn from_iter<I: IntoIterator<Item = (L, Vec<String>)>>(iter: I) -> Self {
        let mut expected = Self::new();
        for (label, values) in iter {
            expected.insert(label, values);
        }
        expected
    }
}

impl Serialize for ExpectedTyped {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, values) in &self.entries {
            map.serialize_entry(label, values)?;
        }
        map.end()
    }
}

struct ExpectedVisitor;

impl<'de> Visitor<'de> for ExpectedVisitor {
    type Value = ExpectedTyped;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map from type name to a list of values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut expected = ExpectedTyped::new();
        while let Some((label, values)) = access.next_entry::<String, Option<Vec<String>>>()? {
            expected.insert(label, values.unwrap_or_default());
        }
        Ok(expected)
    }
}

/// `null` value lists count as empty.
impl<'de> Deserialize<'de> for ExpectedTyped {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ExpectedVisitor)
    }
}

/// One labelled evaluation case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalCase {
    #[serde(default = "missing_id", deserialize_with = "id_from_value")]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "expected_from_value")]
    pub expected_typed: ExpectedTyped,
}

impl EvalCase {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            expected_typed: ExpectedTyped::new(),
        }
    }

    /// Add an expected value, ignoring exact duplicates.
    pub fn with_expected(mut self, label: &str, value: impl Into<String>) -> Self {
        self.expected_typed.push(label, value);
        self
    }

    pub fn expected_count(&self) -> usize {
        self.expected_typed.pair_count()
    }
}

/// An ordered list of evaluation cases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvalBundle {
    pub tests: Vec<EvalCase>,
}

impl EvalBundle {
    pub fn new(tests: Vec<EvalCase>) -> Self {
        Self { tests }
    }

    /// Read a bundle from disk.
    pub fn load(path: impl AsRef<Path>) -> ShroudResult<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        if !path.is_file() {
            return Err(EvalError::BundleNotFound { path: shown }.into());
        }
        let raw = std::fs::read_to_string(path)?;
        let bundle = Self::parse(&raw, &shown)?;
        tracing::debug!(path = %shown, cases = bundle.len(), "loaded evaluation bundle");
        Ok(bundle)
    }

    /// Parse a bundle from JSON text. `origin` names the source in errors.
    pub fn parse(json: &str, origin: &str) -> ShroudResult<Self> {
        let malformed = |reason: String| EvalError::MalformedBundle {
            path: origin.to_string(),
            reason,
        };
        let doc: Value = serde_json::from_str(json).map_err(|e| malformed(e.to_string()))?;
        let Some(tests) = doc.get("tests") else {
            return Err(malformed("expected an object with a \"tests\" list".to_string()).into());
        };
        if !tests.is_array() {
            return Err(malformed("\"tests\" must be a list".to_string()).into());
        }
        // Decode the cases from the text itself: `Value` maps do not keep
        // key order, and expected types are scored in document order.
        let bundle: Self = serde_json::from_str(json).map_err(|e| malformed(e.to_string()))?;
        Ok(bundle)
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

fn missing_id() -> String {
    MISSING_CASE_ID.to_string()
}

/// Ids are usually strings; numbers are rendered, null means missing.
fn id_from_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => missing_id(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// A `null` map counts as empty.
fn expected_from_value<'de, D>(deserializer: D) -> Result<ExpectedTyped, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ExpectedTyped>::deserialize(deserializer)?.unwrap_or_default())
}
