use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::constants::{FAILURE_TEXT, SUCCESS_TEXT};

/// One of the three user-entered values
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Message is the only multi-line input
    pub fn is_multiline(&self) -> bool {
        matches!(self, Field::Message)
    }
}

/// Raw field values as typed by the user
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        FormFields {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Validated JSON body posted to the backend
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field validation messages, at most one per field
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

/// Lifecycle of the current submission
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Carries the diagnostic detail; never shown to the user
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Post-submit status message
#[derive(Clone, Debug)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
    pub at: DateTime<Local>,
}

impl Feedback {
    pub fn success() -> Self {
        Feedback {
            kind: FeedbackKind::Success,
            text: String::from(SUCCESS_TEXT),
            at: Local::now(),
        }
    }

    pub fn failure() -> Self {
        Feedback {
            kind: FeedbackKind::Error,
            text: String::from(FAILURE_TEXT),
            at: Local::now(),
        }
    }
}
