//! Test fixture loader for shroud golden datasets.
//!
//! Golden masking cases live under `golden/masking/`, evaluation bundles
//! under `golden/eval/`. Loaders panic on missing or malformed files; they
//! are for tests only.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// This crate's own directory; the golden data sits next to `Cargo.toml`.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> T {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("cannot parse fixture {}: {e}", path.display()))
}

/// Load and deserialize a JSON fixture, relative to the fixtures root.
///
/// # Panics
/// Panics if the file is missing or does not deserialize into `T`.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    read_json(&fixture_path(relative_path))
}

pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).is_file()
}

/// Absolute path of a fixture, for code under test that opens files itself.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// `*.json` files directly under `subdir`, sorted by name. Empty if the
/// directory does not exist.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(fixture_path(subdir)) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// Recognizer candidate as written in masking fixtures.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureEntity {
    pub start: usize,
    pub end: usize,
    pub label: String,
    #[serde(default)]
    pub score: Option<f64>,
}

/// Expected engine output for one masking case.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedMasking {
    pub masked_text: String,
    /// Tag → original.
    pub mapping: std::collections::BTreeMap<String, String>,
    /// Tags in span start order.
    pub tags: Vec<String>,
}

/// One golden masking case: input text, recognizer output, expected result.
#[derive(Debug, Clone, Deserialize)]
pub struct MaskingCase {
    pub id: String,
    pub description: String,
    pub text: String,
    #[serde(default)]
    pub entities: Vec<FixtureEntity>,
    pub expected: ExpectedMasking,
}

/// Load every golden masking case, ordered by file name.
pub fn load_masking_cases() -> Vec<MaskingCase> {
    list_fixtures("golden/masking")
        .into_iter()
        .map(|path| read_json(&path))
        .collect()
}
