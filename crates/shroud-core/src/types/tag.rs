use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::CanonicalType;

/// Placeholder substituted for a masked span, rendered as `[LABEL_N]`.
///
/// `N` is a 1-based per-label counter scoped to one masking run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaceholderTag {
    label: CanonicalType,
    ordinal: u32,
}

impl PlaceholderTag {
    pub fn new(label: CanonicalType, ordinal: u32) -> Self {
        Self { label, ordinal }
    }

    pub fn label(&self) -> CanonicalType {
        self.label
    }

    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }
}

impl fmt::Display for PlaceholderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}_{}]", self.label.as_str(), self.ordinal)
    }
}

impl FromStr for PlaceholderTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| format!("placeholder must be bracketed: {s}"))?;
        let (label, ordinal) = inner
            .rsplit_once('_')
            .ok_or_else(|| format!("placeholder has no ordinal: {s}"))?;
        let label: CanonicalType = label.parse()?;
        let ordinal: u32 = ordinal
            .parse()
            .map_err(|_| format!("invalid placeholder ordinal: {s}"))?;
        if ordinal == 0 {
            return Err(format!("placeholder ordinals start at 1: {s}"));
        }
        Ok(Self { label, ordinal })
    }
}

impl Serialize for PlaceholderTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PlaceholderTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
