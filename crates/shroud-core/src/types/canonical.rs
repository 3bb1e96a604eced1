use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of PII categories the engine emits.
///
/// Priority, normal form and checksum behavior are attached here so the
/// rest of the workspace never dispatches on label strings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanonicalType {
    // Identity
    Person,
    Org,
    // Contact
    EmailAddress,
    UkPhoneNumber,
    IpAddress,
    // Time
    Date,
    DateOfBirth,
    // Geography
    Location,
    UkPostcode,
    UkAddress,
    // Banking
    UkSortCode,
    UkAccountNumber,
    UkIban,
    // Cards
    CreditCardNumber,
    CardExpiry,
    // IDs
    TransactionId,
    CustomerReference,
    SessionId,
    SupportTicketNumber,
    AccountId,
    InternalId,
}

/// How a raw value is folded into a comparison key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalForm {
    /// Keep ASCII digits only.
    Digits,
    /// Uppercase with all whitespace removed.
    UpperCompact,
    /// Lowercase ASCII letters and digits only.
    LowerAlnum,
    /// Digits and `+` only.
    PhoneDigits,
    /// Lowercase, trimmed, whitespace runs collapsed to one space.
    LowerCollapsed,
}

/// Format check used to re-weight a span's confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumRule {
    Luhn,
    IbanMod97,
    SortCodeDigits,
    AccountNumberDigits,
}

impl CanonicalType {
    pub const ALL: [CanonicalType; 21] = [
        Self::Person,
        Self::Org,
        Self::EmailAddress,
        Self::UkPhoneNumber,
        Self::IpAddress,
        Self::Date,
        Self::DateOfBirth,
        Self::Location,
        Self::UkPostcode,
        Self::UkAddress,
        Self::UkSortCode,
        Self::UkAccountNumber,
        Self::UkIban,
        Self::CreditCardNumber,
        Self::CardExpiry,
        Self::TransactionId,
        Self::CustomerReference,
        Self::SessionId,
        Self::SupportTicketNumber,
        Self::AccountId,
        Self::InternalId,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Org => "ORG",
            Self::EmailAddress => "EMAIL_ADDRESS",
            Self::UkPhoneNumber => "UK_PHONE_NUMBER",
            Self::IpAddress => "IP_ADDRESS",
            Self::Date => "DATE",
            Self::DateOfBirth => "DATE_OF_BIRTH",
            Self::Location => "LOCATION",
            Self::UkPostcode => "UK_POSTCODE",
            Self::UkAddress => "UK_ADDRESS",
            Self::UkSortCode => "UK_SORT_CODE",
            Self::UkAccountNumber => "UK_ACCOUNT_NUMBER",
            Self::UkIban => "UK_IBAN",
            Self::CreditCardNumber => "CREDIT_CARD_NUMBER",
            Self::CardExpiry => "CARD_EXPIRY",
            Self::TransactionId => "TRANSACTION_ID",
            Self::CustomerReference => "CUSTOMER_REFERENCE",
            Self::SessionId => "SESSION_ID",
            Self::SupportTicketNumber => "SUPPORT_TICKET_NUMBER",
            Self::AccountId => "ACCOUNT_ID",
            Self::InternalId => "INTERNAL_ID",
        }
    }

    /// Overlap resolution weight. Higher wins.
    pub fn priority(self) -> u32 {
        match self {
            Self::UkIban => 120,
            Self::CreditCardNumber => 115,
            Self::UkSortCode => 110,
            Self::UkAccountNumber => 108,
            Self::CardExpiry => 105,

            Self::EmailAddress | Self::IpAddress => 95,
            Self::UkPhoneNumber => 92,

            Self::UkAddress => 88,
            Self::UkPostcode => 85,

            Self::TransactionId => 75,
            Self::SupportTicketNumber => 74,
            Self::SessionId => 73,
            Self::CustomerReference => 72,
            Self::AccountId => 71,
            Self::InternalId => 70,

            Self::DateOfBirth => 55,
            Self::Date => 50,
            Self::Person => 40,
            Self::Org => 35,
            Self::Location => 30,
        }
    }

    pub fn normal_form(self) -> NormalForm {
        match self {
            Self::UkAccountNumber | Self::CreditCardNumber | Self::UkSortCode => NormalForm::Digits,
            Self::UkIban => NormalForm::UpperCompact,
            Self::EmailAddress | Self::IpAddress | Self::CardExpiry => NormalForm::LowerAlnum,
            Self::UkPhoneNumber => NormalForm::PhoneDigits,
            _ => NormalForm::LowerCollapsed,
        }
    }

    pub fn checksum(self) -> Option<ChecksumRule> {
        match self {
            Self::CreditCardNumber => Some(ChecksumRule::Luhn),
            Self::UkIban => Some(ChecksumRule::IbanMod97),
            Self::UkSortCode => Some(ChecksumRule::SortCodeDigits),
            Self::UkAccountNumber => Some(ChecksumRule::AccountNumberDigits),
            _ => None,
        }
    }

    /// Map a free-text recognizer label onto the canonical taxonomy.
    /// Lookup is trimmed and case-insensitive; unknown labels yield `None`.
    pub fn from_recognizer_label(label: &str) -> Option<Self> {
        let canon = match label.trim().to_lowercase().as_str() {
            "person" | "name" | "first_name" | "last_name" => Self::Person,
            "organization" | "organisation" | "company" | "org" => Self::Org,

            "email" | "email_address" => Self::EmailAddress,
            "phone" | "phone_number" | "mobile" => Self::UkPhoneNumber,

            "ip" | "ip_address" => Self::IpAddress,

            "date" | "date_time" | "datetime" => Self::Date,

            "address" | "street_address" | "full_address" => Self::UkAddress,
            "location" | "city" | "town" | "state" | "province" | "region" | "country"
            | "place" => Self::Location,
            "postcode" | "uk_postcode" => Self::UkPostcode,

            "uk_iban" | "iban" => Self::UkIban,
            "sort_code" | "uk_sort_code" => Self::UkSortCode,
            "account_number" | "uk_account_number" => Self::UkAccountNumber,

            "credit_card_number" | "card_number" => Self::CreditCardNumber,
            "card_expiry" | "expiry" | "expiration_date" => Self::CardExpiry,

            "transaction_id" => Self::TransactionId,
            "support_ticket_number" => Self::SupportTicketNumber,
            "session_id" => Self::SessionId,
            "customer_reference" => Self::CustomerReference,
            "account_id" => Self::AccountId,
            "internal_id" => Self::InternalId,
            _ => return None,
        };
        Some(canon)
    }
}

impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalType {
    type Err = String;

    /// Parse the canonical upper-case spelling (`UK_IBAN`, `PERSON`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown canonical type: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_roundtrips_through_from_str() {
        for t in CanonicalType::ALL {
            assert_eq!(t.as_str().parse::<CanonicalType>().unwrap(), t);
        }
    }

    #[test]
    fn serde_uses_canonical_spelling() {
        for t in CanonicalType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }

    #[test]
    fn recognizer_labels_are_case_insensitive() {
        assert_eq!(
            CanonicalType::from_recognizer_label("  Sort_Code "),
            Some(CanonicalType::UkSortCode)
        );
        assert_eq!(CanonicalType::from_recognizer_label("vehicle"), None);
    }
}
