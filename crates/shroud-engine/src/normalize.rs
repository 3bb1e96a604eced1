//! Canonical comparison keys for matched values.
//!
//! Shared by tag deduplication and by the evaluation scorer so both sides
//! fold values identically. Every function is total.

use shroud_core::types::{CanonicalType, NormalForm};

/// Fold `raw` into the comparison key for `label`.
pub fn normalize(label: CanonicalType, raw: &str) -> String {
    apply(label.normal_form(), raw)
}

/// Apply a specific normal form.
pub fn apply(form: NormalForm, raw: &str) -> String {
    match form {
        NormalForm::Digits => digits(raw),
        NormalForm::UpperCompact => upper_compact(raw),
        NormalForm::LowerAlnum => lower_alnum(raw),
        NormalForm::PhoneDigits => phone_digits(raw),
        NormalForm::LowerCollapsed => lower_collapsed(raw),
    }
}

/// ASCII digits only.
pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Uppercase with every whitespace character removed.
pub fn upper_compact(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Lowercase ASCII letters and digits only. Also the generic fuzzy-match key.
pub fn lower_alnum(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Digits and `+` only.
pub fn phone_digits(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Whitespace runs collapsed to a single space, trimmed, lowercased.
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn lower_collapsed(raw: &str) -> String {
    collapse_whitespace(raw).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banking_values_keep_digits() {
        assert_eq!(normalize(CanonicalType::UkSortCode, "20-45-67"), "204567");
        assert_eq!(normalize(CanonicalType::UkAccountNumber, " 8392 0145 "), "83920145");
        assert_eq!(
            normalize(CanonicalType::CreditCardNumber, "4111 1111-1111 1111"),
            "4111111111111111"
        );
    }

    #[test]
    fn iban_is_upper_compact() {
        assert_eq!(
            normalize(CanonicalType::UkIban, "gb29 nwbk 6016 1331 9268 19"),
            "GB29NWBK60161331926819"
        );
    }

    #[test]
    fn email_ip_and_expiry_are_lower_alnum() {
        assert_eq!(normalize(CanonicalType::EmailAddress, "John.Smith@Example.com"), "johnsmithexamplecom");
        assert_eq!(normalize(CanonicalType::IpAddress, "92.184.33.71"), "921843371");
        assert_eq!(normalize(CanonicalType::CardExpiry, "08/27"), "0827");
    }

    #[test]
    fn phone_keeps_plus() {
        assert_eq!(normalize(CanonicalType::UkPhoneNumber, "+44 7911 456882"), "+447911456882");
        assert_eq!(normalize(CanonicalType::UkPhoneNumber, "020 7946 0958"), "02079460958");
    }

    #[test]
    fn fallback_collapses_whitespace() {
        assert_eq!(normalize(CanonicalType::Person, "  John \n  SMITH "), "john smith");
        assert_eq!(normalize(CanonicalType::UkAddress, "Flat 3B,\n  London"), "flat 3b, london");
    }

    #[test]
    fn garbage_input_is_total() {
        assert_eq!(normalize(CanonicalType::UkSortCode, ""), "");
        assert_eq!(normalize(CanonicalType::EmailAddress, "¿¡!"), "");
        assert_eq!(normalize(CanonicalType::Person, "   "), "");
    }
}
