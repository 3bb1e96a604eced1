//! UK postcodes and the multi-line address blocks around them.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use shroud_core::types::{CanonicalType, Span};

use super::{push_span, DetectorPattern, PatternLimits};

pub const POSTCODE_SCORE: f64 = 0.99;
pub const ADDRESS_SCORE: f64 = 0.96;

/// Lines longer than this are treated as prose, not address components.
const MAX_LINE_CHARS: usize = 160;
/// A colon this early in a line marks a heading.
const HEADING_COLON_MAX: usize = 30;

const ADDRESS_HINT_TOKENS: &[&str] = &[
    "street",
    "st",
    "road",
    "rd",
    "avenue",
    "ave",
    "lane",
    "ln",
    "drive",
    "dr",
    "flat",
    "apt",
    "apartment",
    "unit",
    "building",
    "house",
    "uk",
    "united kingdom",
    "london",
    "england",
    "scotland",
    "wales",
];

// ── UK postcode ───────────────────────────────────────────────────────────
detector_pattern!(
    RE_UK_POSTCODE,
    r"(?i)\b[A-Z]{1,2}[0-9][A-Z0-9]?\s*[0-9][A-Z]{2}\b"
);

// ── "Registered address is ..." lead-in on the first block line ───────────
detector_pattern!(
    RE_ADDRESS_PREFIX,
    r"(?i)^\s*(?:registered|billing|delivery|shipping|residential|home|office)?\s*address\s*(?:is|:|-|–|—)\s+"
);

pub fn all_patterns() -> Vec<DetectorPattern> {
    vec![
        DetectorPattern {
            name: "uk_postcode",
            detector: "postal",
            regex: &RE_UK_POSTCODE,
        },
        DetectorPattern {
            name: "address_prefix",
            detector: "postal",
            regex: &RE_ADDRESS_PREFIX,
        },
    ]
}

/// Emit every postcode, each followed by its address block if one forms.
/// A block holding several postcodes is emitted once.
pub fn detect_postcodes(text: &str, limits: &PatternLimits, out: &mut Vec<Span>) {
    let Some(re) = RE_UK_POSTCODE.as_ref() else { return };
    let mut seen_blocks = BTreeSet::new();
    for m in re.find_iter(text) {
        push_span(out, text, m.start(), m.end(), CanonicalType::UkPostcode, POSTCODE_SCORE);
        if let Some((start, end)) = expand_address_block(text, m.start(), limits) {
            if seen_blocks.insert((start, end)) {
                push_span(out, text, start, end, CanonicalType::UkAddress, ADDRESS_SCORE);
            }
        }
    }
}

fn contains_postcode(s: &str) -> bool {
    RE_UK_POSTCODE.as_ref().is_some_and(|re| re.is_match(s))
}

fn has_hint(lowercased: &str) -> bool {
    ADDRESS_HINT_TOKENS.iter().any(|tok| lowercased.contains(tok))
}

fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

/// Whether a single line could be part of a postal address.
pub fn looks_like_address_component(line: &str) -> bool {
    let s = line.trim();
    if s.is_empty() {
        return false;
    }

    // "Customer details:" is a heading; "Registered address: Flat 3B, ..." is not.
    if let Some(colon) = s.chars().position(|c| c == ':') {
        if colon <= HEADING_COLON_MAX {
            let after = s.split_once(':').map_or("", |(_, rest)| rest.trim());
            if after.is_empty() {
                return false;
            }
            let comma = after.contains(',');
            let hint = has_hint(&after.to_lowercase());
            if !(contains_postcode(after) || (has_digit(after) && comma) || (hint && comma)) {
                return false;
            }
        }
    }

    if s.chars().count() > MAX_LINE_CHARS {
        return false;
    }

    let comma = s.contains(',');
    let hint = has_hint(&s.to_lowercase());
    contains_postcode(s) || (has_digit(s) && (comma || hint)) || (hint && comma)
}

/// Byte bounds of the line containing `pos`, excluding the newline.
fn line_bounds(text: &str, pos: usize) -> (usize, usize) {
    let start = text[..pos].rfind('\n').map_or(0, |i| i + 1);
    let end = text[pos..].find('\n').map_or(text.len(), |i| pos + i);
    (start, end)
}

/// Grow the postcode's line into an address block: up first, then down,
/// stopping at blank or non-address lines. Returns trimmed byte bounds.
pub fn expand_address_block(
    text: &str,
    postcode_start: usize,
    limits: &PatternLimits,
) -> Option<(usize, usize)> {
    if limits.address_max_lines == 0 {
        return None;
    }

    let (mut block_start, mut block_end) = line_bounds(text, postcode_start);
    if !looks_like_address_component(&text[block_start..block_end]) {
        return None;
    }
    let mut lines_used = 1;

    while lines_used < limits.address_max_lines && block_start > 0 {
        let prev_end = block_start - 1;
        let prev_start = text[..prev_end].rfind('\n').map_or(0, |i| i + 1);
        let prev = &text[prev_start..prev_end];
        if prev.trim().is_empty() || !looks_like_address_component(prev) {
            break;
        }
        block_start = prev_start;
        lines_used += 1;
    }

    while lines_used < limits.address_max_lines && text[block_end..].starts_with('\n') {
        let next_start = block_end + 1;
        let next_end = text[next_start..]
            .find('\n')
            .map_or(text.len(), |i| next_start + i);
        let next = &text[next_start..next_end];
        if next.trim().is_empty() || !looks_like_address_component(next) {
            break;
        }
        block_end = next_end;
        lines_used += 1;
    }

    // Drop an "address is" style lead-in from the first line.
    let first_line_end = text[block_start..block_end]
        .find('\n')
        .map_or(block_end, |i| block_start + i);
    if let Some(prefix) = RE_ADDRESS_PREFIX
        .as_ref()
        .and_then(|re| re.find(&text[block_start..first_line_end]))
    {
        block_start += prefix.end();
    }

    let raw = &text[block_start..block_end];
    let candidate = raw.trim();
    if candidate.is_empty()
        || !contains_postcode(candidate)
        || !has_digit(candidate)
        || !candidate.contains(',')
        || candidate.chars().count() > limits.address_max_chars
    {
        return None;
    }

    let left_ws = raw.len() - raw.trim_start().len();
    let right_ws = raw.len() - raw.trim_end().len();
    Some((block_start + left_ws, block_end - right_ws))
}
