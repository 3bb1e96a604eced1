/// Label vocabulary sent to the recognizer when the caller does not pass one.
pub const DEFAULT_RECOGNIZER_LABELS: &[&str] = &[
    "person",
    "organization",
    "email_address",
    "phone_number",
    "ip_address",
    "date",
    "address",
    "street_address",
    "location",
    "postcode",
    "uk_iban",
    "sort_code",
    "account_number",
    "credit_card_number",
    "card_expiry",
    "transaction_id",
    "support_ticket_number",
    "session_id",
    "customer_reference",
    "account_id",
];

/// Recognizer threshold used when none is configured.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Similarity at or above which the scorer accepts a match.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.88;

/// Placeholder returned for evaluation cases without an id.
pub const MISSING_CASE_ID: &str = "<no-id>";
