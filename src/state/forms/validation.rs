//! Contact form validation rules
//!
//! Every field is checked on every call. Within a field the rules run in
//! order and only the first failing rule reports, so an empty name never also
//! reports the length rule.

use super::field::Field;
use super::form_state::{FieldErrors, FormFields};
use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld` with no whitespace and no extra `@`
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Validate the full field set
///
/// Returns an empty [`FieldErrors`] iff the form may be submitted.
pub fn validate(fields: &FormFields) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        if let Some(message) = check_field(field, fields.get(field)) {
            errors.insert(field, message);
        }
    }
    errors
}

/// First failing rule for a single field, if any
pub fn check_field(field: Field, value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    match field {
        Field::Name => check_length(
            trimmed,
            2,
            "Name is required",
            "Name must be at least 2 characters",
        ),
        Field::Email => {
            if trimmed.is_empty() {
                Some("Email is required")
            } else if !EMAIL_PATTERN.is_match(value) {
                Some("Please enter a valid email address")
            } else {
                None
            }
        }
        Field::Subject => check_length(
            trimmed,
            5,
            "Subject is required",
            "Subject must be at least 5 characters",
        ),
        Field::Message => check_length(
            trimmed,
            10,
            "Message is required",
            "Message must be at least 10 characters",
        ),
    }
}

/// Length in UTF-16 code units, the unit browser form lengths are measured in
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn check_length(
    trimmed: &str,
    min_units: usize,
    required: &'static str,
    too_short: &'static str,
) -> Option<&'static str> {
    if trimmed.is_empty() {
        Some(required)
    } else if utf16_len(trimmed) < min_units {
        Some(too_short)
    } else {
        None
    }
}
