use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::contact::Contact;
use super::field::Field;

/// Minimum number of characters in a first name.
pub const FIRST_NAME_MIN_LEN: usize = 5;

/// Validation errors for contact form fields.
///
/// The `Display` text is what the form renders under the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("firstName must have at least 5 characters.")]
    FirstNameTooShort,
    #[error("lastName is a required field.")]
    MissingLastName,
    #[error("email must be a valid email address.")]
    InvalidEmail,
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("valid hardcoded regex")
});

/// Validates a first name: at least [`FIRST_NAME_MIN_LEN`] characters.
pub fn validate_first_name(first_name: &str) -> Result<(), ValidationError> {
    if first_name.chars().count() < FIRST_NAME_MIN_LEN {
        Err(ValidationError::FirstNameTooShort)
    } else {
        Ok(())
    }
}

/// Validates a last name: must be non-empty.
pub fn validate_last_name(last_name: &str) -> Result<(), ValidationError> {
    if last_name.is_empty() {
        Err(ValidationError::MissingLastName)
    } else {
        Ok(())
    }
}

/// Validates an email address (e.g., `bluebill1049@hotmail.com`).
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Runs the rule for `field` against `value`. The message has no rule.
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::FirstName => validate_first_name(value),
        Field::LastName => validate_last_name(value),
        Field::Email => validate_email(value),
        Field::Message => Ok(()),
    }
}

/// Runs every rule and returns all failures in form order.
pub fn validate_contact(contact: &Contact) -> Vec<(Field, ValidationError)> {
    Field::ALL
        .into_iter()
        .filter_map(|field| {
            validate_field(field, contact.get(field))
                .err()
                .map(|e| (field, e))
        })
        .collect()
}
