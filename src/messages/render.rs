//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::{SUBMITTING_LABEL, SUBMIT_LABEL};
use crate::messages::ui_events::Focus;
use crate::models::{Feedback, FieldErrors, FormFields};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Form data
    pub fields: FormFields,
    pub errors: FieldErrors,

    // Editing
    pub focus: Focus,
    pub cursor_position: usize,

    // Submission
    pub is_submitting: bool,
    pub feedback: Option<Feedback>,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    /// The submit control is disabled for the duration of a submission
    pub fn submit_disabled(&self) -> bool {
        self.is_submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}
