//! App state - pure data structure with no I/O logic

use crate::messages::ui_events::Focus;
use crate::messages::RenderState;
use crate::models::{Feedback, FieldErrors, FormFields, SubmissionState};

/// Main application state - pure data, no I/O
#[derive(Default)]
pub struct AppState {
    // Form data
    pub fields: FormFields,
    pub errors: FieldErrors,
    /// Set after a blocked submit; edits then re-validate the edited field
    pub revalidate_on_edit: bool,

    // Editing
    pub focus: Focus,
    pub cursor_position: usize,

    // Submission
    pub submission: SubmissionState,
    pub feedback: Option<Feedback>,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,

    // Popups
    pub show_help: bool,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            next_request_id: 1,
            ..Default::default()
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Get the focused field content
    pub fn current_input(&self) -> &str {
        match self.focus.field() {
            Some(field) => self.fields.get(field),
            None => "",
        }
    }

    /// Get mutable reference to the focused field, if focus is on one
    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        let field = self.focus.field()?;
        Some(self.fields.get_mut(field))
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            fields: self.fields.clone(),
            errors: self.errors.clone(),
            focus: self.focus,
            cursor_position: self.cursor_position,
            is_submitting: self.submission.is_submitting(),
            feedback: self.feedback.clone(),
            show_help: self.show_help,
        }
    }
}
