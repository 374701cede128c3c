//! Form validation - static rules checked at submit time
//!
//! Each field has an ordered list of rules; the first failing rule for a
//! field produces its error message. All fields are checked on every pass so
//! the user sees every problem at once.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{ContactPayload, Field, FieldErrors, FormFields};

/// A predicate plus the message shown when it fails
pub struct Rule {
    pub field: Field,
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

/// Rules in evaluation order
pub const RULES: &[Rule] = &[
    Rule {
        field: Field::Name,
        check: is_present,
        message: "Name is required",
    },
    Rule {
        field: Field::Email,
        check: is_present,
        message: "Email is required",
    },
    Rule {
        field: Field::Email,
        check: is_email,
        message: "Invalid email address",
    },
    Rule {
        field: Field::Message,
        check: is_present,
        message: "Message is required",
    },
];

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"(?i)^\S+@\S+$").expect("email pattern is valid"))
}

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

/// Non-whitespace, `@`, non-whitespace
pub fn is_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Email values lose surrounding whitespace before checking and sending
fn normalize(field: Field, value: &str) -> &str {
    match field {
        Field::Email => value.trim(),
        Field::Name | Field::Message => value,
    }
}

/// Check a single field, returning the first violated rule's message
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    let value = normalize(field, value);
    RULES
        .iter()
        .filter(|rule| rule.field == field)
        .find(|rule| !(rule.check)(value))
        .map(|rule| rule.message)
}

/// Validate all fields, producing the payload or every field error
pub fn validate(fields: &FormFields) -> Result<ContactPayload, FieldErrors> {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        if let Some(message) = validate_field(field, fields.get(field)) {
            errors.insert(field, message);
        }
    }

    if errors.is_empty() {
        Ok(ContactPayload {
            name: fields.name.clone(),
            email: normalize(Field::Email, &fields.email).to_string(),
            message: fields.message.clone(),
        })
    } else {
        Err(errors)
    }
}
