//! Phone numbers, IPv4 addresses and email addresses.

use std::sync::LazyLock;

use regex::Regex;
use shroud_core::types::{CanonicalType, Span};

use super::{find_guarded, is_word_char, push_span, DetectorPattern};

pub const PHONE_SCORE: f64 = 0.99;
pub const IPV4_SCORE: f64 = 0.99;
pub const EMAIL_SCORE: f64 = 0.99;

// ── UK landline: 0 + 2-4 digits, then two groups of 3-4 ───────────────────
detector_pattern!(
    RE_UK_LANDLINE,
    r"(0[0-9]{2,4}\s?[0-9]{3,4}\s?[0-9]{3,4})(?:[^\w]|$)"
);

// ── UK mobile, international form ─────────────────────────────────────────
detector_pattern!(
    RE_UK_MOBILE_INTL,
    r"(\+44\s?7[0-9]{3}\s?[0-9]{6})(?:[^\w]|$)"
);

// ── IPv4 (octet range checked after matching) ─────────────────────────────
detector_pattern!(RE_IPV4, r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b");

// ── Email ─────────────────────────────────────────────────────────────────
// A trailing '.' is allowed only when it ends the sentence.
detector_pattern!(
    RE_EMAIL,
    r"(?i)([A-Z0-9._%+\-]+@[A-Z0-9.\-]+\.[A-Z]{2,})(?:[^\w.+\-]|\.(?:[^0-9A-Za-z]|$)|$)"
);

pub fn all_patterns() -> Vec<DetectorPattern> {
    vec![
        DetectorPattern {
            name: "uk_landline",
            detector: "contact",
            regex: &RE_UK_LANDLINE,
        },
        DetectorPattern {
            name: "uk_mobile_intl",
            detector: "contact",
            regex: &RE_UK_MOBILE_INTL,
        },
        DetectorPattern {
            name: "ipv4",
            detector: "contact",
            regex: &RE_IPV4,
        },
        DetectorPattern {
            name: "email",
            detector: "contact",
            regex: &RE_EMAIL,
        },
    ]
}

/// Landlines first, then `+44` mobiles.
pub fn detect_phones(text: &str, out: &mut Vec<Span>) {
    let not_after_word = |prev: Option<char>| !prev.is_some_and(is_word_char);
    for re in [&RE_UK_LANDLINE, &RE_UK_MOBILE_INTL] {
        let Some(re) = re.as_ref() else { continue };
        for (start, end) in find_guarded(re, text, not_after_word) {
            push_span(out, text, start, end, CanonicalType::UkPhoneNumber, PHONE_SCORE);
        }
    }
}

pub fn detect_ipv4(text: &str, out: &mut Vec<Span>) {
    let Some(re) = RE_IPV4.as_ref() else { return };
    for m in re.find_iter(text) {
        if is_valid_ipv4(m.as_str()) {
            push_span(out, text, m.start(), m.end(), CanonicalType::IpAddress, IPV4_SCORE);
        }
    }
}

pub fn detect_emails(text: &str, out: &mut Vec<Span>) {
    let Some(re) = RE_EMAIL.as_ref() else { return };
    let not_after_local = |prev: Option<char>| {
        !prev.is_some_and(|c| is_word_char(c) || matches!(c, '.' | '+' | '-'))
    };
    for (start, end) in find_guarded(re, text, not_after_local) {
        push_span(out, text, start, end, CanonicalType::EmailAddress, EMAIL_SCORE);
    }
}

/// Four dot-separated octets, each 0-255.
pub fn is_valid_ipv4(candidate: &str) -> bool {
    let parts: Vec<&str> = candidate.split('.').collect();
    parts.len() == 4
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.parse::<u16>().is_ok_and(|n| n <= 255))
}
