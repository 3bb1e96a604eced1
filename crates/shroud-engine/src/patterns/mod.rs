//! Deterministic detectors that backstop the external recognizer.
//!
//! Every detector returns spans with `source = Pattern`, the literal matched
//! text and a fixed score. A regex that fails to compile leaves its detector
//! silent; [`pattern_health`] reports the gap.

use std::sync::LazyLock;

use regex::Regex;
use shroud_core::config::MaskingConfig;
use shroud_core::types::{CanonicalType, Span, SpanSource};

use crate::degradation::DegradationTracker;

macro_rules! detector_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

pub mod contact;
pub mod dates;
pub mod postal;

/// A named, lazily compiled detector regex.
pub struct DetectorPattern {
    pub name: &'static str,
    pub detector: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
}

/// Size limits the detectors read from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternLimits {
    pub address_max_lines: usize,
    pub address_max_chars: usize,
    pub dob_lookbehind_chars: usize,
    pub dob_lookahead_chars: usize,
}

impl PatternLimits {
    pub fn from_config(config: &MaskingConfig) -> Self {
        Self {
            address_max_lines: config.address_max_lines,
            address_max_chars: config.address_max_chars,
            dob_lookbehind_chars: config.dob_lookbehind_chars,
            dob_lookahead_chars: config.dob_lookahead_chars,
        }
    }
}

impl Default for PatternLimits {
    fn default() -> Self {
        Self::from_config(&MaskingConfig::default())
    }
}

/// Run every detector with default limits.
pub fn detect_patterns(text: &str) -> Vec<Span> {
    detect_patterns_with(text, &PatternLimits::default())
}

/// Run every detector. Output order is fixed: landline, mobile, IPv4,
/// postcode (with any address block), email, textual dates, D/M/Y, Y/M/D.
pub fn detect_patterns_with(text: &str, limits: &PatternLimits) -> Vec<Span> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut spans = Vec::new();
    contact::detect_phones(text, &mut spans);
    contact::detect_ipv4(text, &mut spans);
    postal::detect_postcodes(text, limits, &mut spans);
    contact::detect_emails(text, &mut spans);
    dates::detect_dates(text, limits, &mut spans);
    spans
}

/// Every detector regex, for health checks.
pub fn all_patterns() -> Vec<DetectorPattern> {
    let mut out = contact::all_patterns();
    out.extend(postal::all_patterns());
    out.extend(dates::all_patterns());
    out
}

/// Record every detector regex that failed to compile.
pub fn pattern_health() -> DegradationTracker {
    let mut tracker = DegradationTracker::new();
    for pat in all_patterns() {
        if pat.regex.is_none() {
            tracker.record_failure(pat.name, pat.detector, "regex compilation failed");
            shroud_observability::events::pattern_degraded(pat.name, pat.detector);
        }
    }
    tracker
}

pub(crate) fn push_span(
    out: &mut Vec<Span>,
    text: &str,
    start: usize,
    end: usize,
    label: CanonicalType,
    score: f64,
) {
    if let Some(span) = Span::from_text(text, start, end, label, score, SpanSource::Pattern) {
        out.push(span);
    }
}

/// Python-style `\w`: alphanumeric or underscore.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Find every match of capture group 1 whose preceding char passes `lead_ok`.
///
/// The regex must start with group 1. Trailing guards belong in the regex
/// itself (as a consumed `(?:[^\w]|$)` suffix) so the engine can fall back to
/// a shorter match; a rejected leading guard retries one char further on.
pub(crate) fn find_guarded<F>(re: &Regex, text: &str, lead_ok: F) -> Vec<(usize, usize)>
where
    F: Fn(Option<char>) -> bool,
{
    let mut out = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        let Some(caps) = re.captures_at(text, pos) else {
            break;
        };
        let Some(group) = caps.get(1) else {
            break;
        };
        let prev = text[..group.start()].chars().next_back();
        if lead_ok(prev) && group.end() > group.start() {
            out.push((group.start(), group.end()));
            pos = group.end();
        } else {
            pos = next_char_boundary(text, group.start());
        }
    }
    out
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len(), |c| pos + c.len_utf8())
}
