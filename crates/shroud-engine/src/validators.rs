//! Checksum and format validators.
//!
//! Validators never remove a span; they only move its confidence up or down.

use shroud_core::types::{clamp_score, CanonicalType, ChecksumRule};

use crate::normalize::digits;

/// Score delta applied when a value passes / fails its check.
struct Adjustment {
    bonus: f64,
    penalty: f64,
}

const LUHN: Adjustment = Adjustment {
    bonus: 0.08,
    penalty: 0.15,
};
const IBAN: Adjustment = Adjustment {
    bonus: 0.08,
    penalty: 0.20,
};
const SORT_CODE: Adjustment = Adjustment {
    bonus: 0.03,
    penalty: 0.10,
};
const ACCOUNT_NUMBER: Adjustment = Adjustment {
    bonus: 0.02,
    penalty: 0.10,
};

/// Re-weight `base_score` using the checksum rule attached to `label`.
/// Labels without a rule pass through (clamped to `[0, 1]`).
pub fn adjust_score(label: CanonicalType, raw: &str, base_score: f64) -> f64 {
    let base = clamp_score(base_score);
    let Some(rule) = label.checksum() else {
        return base;
    };
    let (valid, adjustment) = match rule {
        ChecksumRule::Luhn => (luhn_check(raw), &LUHN),
        ChecksumRule::IbanMod97 => (iban_mod97(raw), &IBAN),
        ChecksumRule::SortCodeDigits => (digits(raw).len() == 6, &SORT_CODE),
        ChecksumRule::AccountNumberDigits => (digits(raw).len() == 8, &ACCOUNT_NUMBER),
    };
    if valid {
        clamp_score(base + adjustment.bonus)
    } else {
        clamp_score(base - adjustment.penalty)
    }
}

/// Luhn checksum over the digits of `number`. Fewer than 13 digits is invalid.
pub fn luhn_check(number: &str) -> bool {
    let digits = digits(number);
    if digits.len() < 13 {
        return false;
    }
    let mut total = 0u32;
    for (i, b) in digits.bytes().rev().enumerate() {
        let mut d = u32::from(b - b'0');
        if i % 2 == 1 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        total += d;
    }
    total % 10 == 0
}

/// IBAN mod-97 check. Whitespace is ignored, letters are case-folded;
/// anything other than ASCII letters and digits makes the value invalid.
pub fn iban_mod97(iban: &str) -> bool {
    let compact: String = iban
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect();
    if compact.chars().count() < 15 {
        return false;
    }
    let (head, tail) = match compact.char_indices().nth(4) {
        Some((idx, _)) => compact.split_at(idx),
        None => return false,
    };

    let mut converted = String::with_capacity(compact.len() * 2);
    for ch in tail.chars().chain(head.chars()) {
        match ch {
            '0'..='9' => converted.push(ch),
            'A'..='Z' => converted.push_str(&(u32::from(ch) - u32::from('A') + 10).to_string()),
            _ => return false,
        }
    }

    // Fold in 9-digit chunks so the running value fits in a u64.
    let bytes = converted.as_bytes();
    let mut remainder: u64 = 0;
    for chunk in bytes.chunks(9) {
        let mut value = remainder;
        for b in chunk {
            value = value * 10 + u64::from(b - b'0');
        }
        remainder = value % 97;
    }
    remainder == 1
}
