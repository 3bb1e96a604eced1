//! Calendar dates, labelled DATE_OF_BIRTH when birth context is nearby.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};
use shroud_core::types::{CanonicalType, Span};

use super::{push_span, DetectorPattern, PatternLimits};

pub const DATE_SCORE: f64 = 0.97;

const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2100;

// ── 12 March 1990, 3 Sept 2001 ────────────────────────────────────────────
detector_pattern!(
    RE_DATE_TEXT,
    r"(?i)\b(?P<day>[0-9]{1,2})\s+(?P<mon>jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t|tember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\s+(?P<year>[0-9]{4})\b"
);

// ── 21/12/2025, 21-12-2025, 21.12.2025 ────────────────────────────────────
detector_pattern!(
    RE_DATE_DMY,
    r"\b(?P<day>[0-9]{1,2})[/\-.](?P<mon>[0-9]{1,2})[/\-.](?P<year>[0-9]{4})\b"
);

// ── 2025/12/21, 2025-12-21, 2025.12.21 ────────────────────────────────────
detector_pattern!(
    RE_DATE_YMD,
    r"\b(?P<year>[0-9]{4})[/\-.](?P<mon>[0-9]{1,2})[/\-.](?P<day>[0-9]{1,2})\b"
);

// ── Birth markers ─────────────────────────────────────────────────────────
detector_pattern!(
    RE_DOB_CONTEXT,
    r"(?i)\bDOB\b|\bD\.?O\.?B\.?\b|date\s+of\s+birth|\bborn\b"
);

pub fn all_patterns() -> Vec<DetectorPattern> {
    vec![
        DetectorPattern {
            name: "date_text",
            detector: "dates",
            regex: &RE_DATE_TEXT,
        },
        DetectorPattern {
            name: "date_dmy",
            detector: "dates",
            regex: &RE_DATE_DMY,
        },
        DetectorPattern {
            name: "date_ymd",
            detector: "dates",
            regex: &RE_DATE_YMD,
        },
        DetectorPattern {
            name: "dob_context",
            detector: "dates",
            regex: &RE_DOB_CONTEXT,
        },
    ]
}

/// Textual dates, then D/M/Y, then Y/M/D.
pub fn detect_dates(text: &str, limits: &PatternLimits, out: &mut Vec<Span>) {
    let forms: [(&LazyLock<Option<Regex>>, fn(&Captures<'_>) -> Option<u32>); 3] = [
        (&RE_DATE_TEXT, named_month),
        (&RE_DATE_DMY, numeric_month),
        (&RE_DATE_YMD, numeric_month),
    ];
    for (re, month_of) in forms {
        let Some(re) = re.as_ref() else { continue };
        for caps in re.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            let day = caps.name("day").and_then(|m| m.as_str().parse::<u32>().ok());
            let year = caps.name("year").and_then(|m| m.as_str().parse::<i32>().ok());
            let (Some(day), Some(month), Some(year)) = (day, month_of(&caps), year) else {
                continue;
            };
            if !is_valid_date(year, month, day) {
                continue;
            }
            let label = date_label(text, whole.start(), whole.end(), limits);
            push_span(out, text, whole.start(), whole.end(), label, DATE_SCORE);
        }
    }
}

fn named_month(caps: &Captures<'_>) -> Option<u32> {
    caps.name("mon").and_then(|m| month_number(m.as_str()))
}

fn numeric_month(caps: &Captures<'_>) -> Option<u32> {
    caps.name("mon").and_then(|m| m.as_str().parse().ok())
}

/// Month number from an English month name or its abbreviation.
pub fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    let stem: String = lower.chars().take(3).collect();
    let month = match stem.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Real calendar date within 1900..=2100.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year) && NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// DATE_OF_BIRTH if a birth marker sits in the surrounding window, else DATE.
pub fn date_label(text: &str, start: usize, end: usize, limits: &PatternLimits) -> CanonicalType {
    let left = chars_before(text, start, limits.dob_lookbehind_chars);
    let right = chars_after(text, end, limits.dob_lookahead_chars);
    let context = format!("{left} {right}");
    let is_dob = RE_DOB_CONTEXT
        .as_ref()
        .is_some_and(|re| re.is_match(&context));
    if is_dob {
        CanonicalType::DateOfBirth
    } else {
        CanonicalType::Date
    }
}

fn chars_before(text: &str, pos: usize, n: usize) -> &str {
    let head = &text[..pos];
    if n == 0 {
        return "";
    }
    let from = head.char_indices().rev().nth(n - 1).map_or(0, |(i, _)| i);
    &head[from..]
}

fn chars_after(text: &str, pos: usize, n: usize) -> &str {
    let tail = &text[pos..];
    let to = tail.char_indices().nth(n).map_or(tail.len(), |(i, _)| i);
    &tail[..to]
}
