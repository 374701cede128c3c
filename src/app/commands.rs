//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{Feedback, SubmissionState};
use crate::validation;

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
        self.cursor_position = self.current_input().len();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
        self.cursor_position = self.current_input().len();
    }

    // ========================
    // Input editing
    // ========================

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        let Some(input) = self.current_input_mut() else {
            return;
        };
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
            self.revalidate_focused();
        }
    }

    /// Newlines are only meaningful in the multi-line message
    pub fn enter_newline(&mut self) {
        if self.focus.field().is_some_and(|f| f.is_multiline()) {
            self.enter_char('\n');
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let cursor_pos = self.cursor_position;
        let Some(input) = self.current_input_mut() else {
            return;
        };
        let prev_pos = input[..cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        input.remove(prev_pos);
        self.cursor_position = prev_pos;
        self.revalidate_focused();
    }

    /// Refresh the focused field's error after an edit
    fn revalidate_focused(&mut self) {
        if !self.revalidate_on_edit {
            return;
        }
        if let Some(field) = self.focus.field() {
            match validation::validate_field(field, self.fields.get(field)) {
                Some(message) => self.errors.insert(field, message),
                None => self.errors.remove(field),
            }
        }
    }

    // ========================
    // Submission
    // ========================

    /// Validate and, if the form is valid, build the POST command
    pub fn submit(&mut self) -> Option<NetworkCommand> {
        if self.submission.is_submitting() {
            return None;
        }

        let payload = match validation::validate(&self.fields) {
            Ok(payload) => payload,
            Err(errors) => {
                let invalid: Vec<_> = errors.fields().collect();
                tracing::info!(fields = ?invalid, "Submission blocked by validation");
                self.errors = errors;
                self.revalidate_on_edit = true;
                return None;
            }
        };

        self.errors.clear();
        self.revalidate_on_edit = true;
        self.submission = SubmissionState::Submitting;
        self.feedback = None;

        let id = self.next_id();
        self.pending_request_id = Some(id);

        Some(NetworkCommand::SubmitContact { id, payload })
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_request_id != Some(response.id()) {
            tracing::debug!(id = response.id(), "Ignoring stale response");
            return;
        }

        match response {
            NetworkResponse::Delivered { .. } => {
                self.submission = SubmissionState::Succeeded;
                self.fields.clear();
                self.revalidate_on_edit = false;
                self.cursor_position = 0;
                self.feedback = Some(Feedback::success());
            }
            NetworkResponse::Failed { id, message, .. } => {
                tracing::error!(id, error = %message, "Submission error");
                self.submission = SubmissionState::Failed(message);
                self.feedback = Some(Feedback::failure());
            }
        }
        self.pending_request_id = None;
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FAILURE_TEXT, SUCCESS_TEXT};
    use crate::messages::ui_events::Focus;
    use crate::models::{FeedbackKind, Field, FormFields};

    fn filled() -> AppState {
        let mut state = AppState::new();
        state.fields = FormFields::new("Jo", "jo@example.com", "hello");
        state
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state.enter_char(c);
        }
    }

    fn submitted_id(cmd: Option<NetworkCommand>) -> u64 {
        match cmd {
            Some(NetworkCommand::SubmitContact { id, .. }) => id,
            other => panic!("expected submit command, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_submit_sends_nothing() {
        let mut state = AppState::new();
        state.fields = FormFields::new("", "a@b", "hi");

        assert!(state.submit().is_none());
        assert_eq!(state.errors.len(), 1);
        assert!(state.errors.contains(Field::Name));
        assert_eq!(state.submission, SubmissionState::Idle);
        assert!(state.pending_request_id.is_none());
    }

    #[test]
    fn test_valid_submit_enters_submitting() {
        let mut state = filled();
        state.feedback = Some(Feedback::failure());

        let cmd = state.submit();
        match cmd {
            Some(NetworkCommand::SubmitContact { payload, .. }) => {
                assert_eq!(payload.name, "Jo");
                assert_eq!(payload.email, "jo@example.com");
                assert_eq!(payload.message, "hello");
            }
            other => panic!("expected submit command, got {:?}", other),
        }
        assert!(state.submission.is_submitting());
        assert!(state.feedback.is_none());
        assert!(state.to_render_state().submit_disabled());
        assert_eq!(state.to_render_state().submit_label(), "Sending...");
    }

    #[test]
    fn test_no_second_submit_while_in_flight() {
        let mut state = filled();
        assert!(state.submit().is_some());
        assert!(state.submit().is_none());
    }

    #[test]
    fn test_success_clears_fields() {
        let mut state = filled();
        let id = submitted_id(state.submit());

        state.handle_response(NetworkResponse::Delivered { id, status: 200, time_ms: 12 });

        assert_eq!(state.submission, SubmissionState::Succeeded);
        assert_eq!(state.fields, FormFields::default());
        let feedback = state.feedback.as_ref().unwrap();
        assert_eq!(feedback.kind, FeedbackKind::Success);
        assert_eq!(feedback.text, SUCCESS_TEXT);
        let render = state.to_render_state();
        assert!(!render.submit_disabled());
        assert_eq!(render.submit_label(), "Send Message");
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut state = filled();
        let id = submitted_id(state.submit());

        state.handle_response(NetworkResponse::Failed {
            id,
            message: String::from("HTTP 500 Internal Server Error"),
            time_ms: 40,
        });

        assert!(matches!(state.submission, SubmissionState::Failed(_)));
        assert_eq!(state.fields, FormFields::new("Jo", "jo@example.com", "hello"));
        let feedback = state.feedback.as_ref().unwrap();
        assert_eq!(feedback.kind, FeedbackKind::Error);
        assert_eq!(feedback.text, FAILURE_TEXT);
        assert!(!state.to_render_state().submit_disabled());
    }

    #[test]
    fn test_resubmit_after_failure() {
        let mut state = filled();
        let first = submitted_id(state.submit());
        state.handle_response(NetworkResponse::Failed { id: first, message: String::from("refused"), time_ms: 1 });

        let second = submitted_id(state.submit());
        assert_ne!(first, second);
        assert!(state.submission.is_submitting());
        assert!(state.feedback.is_none());
    }

    #[test]
    fn test_stale_response_ignored() {
        let mut state = filled();
        let id = submitted_id(state.submit());

        state.handle_response(NetworkResponse::Delivered { id: id + 7, status: 200, time_ms: 3 });

        assert!(state.submission.is_submitting());
        assert_eq!(state.fields.name, "Jo");
    }

    #[test]
    fn test_error_cleared_once_field_becomes_valid() {
        let mut state = AppState::new();
        state.fields = FormFields::new("", "bad", "hi");
        assert!(state.submit().is_none());
        assert_eq!(state.errors.len(), 2);

        state.focus = Focus::Email;
        state.cursor_position = state.current_input().len();
        type_str(&mut state, "@x");
        assert!(!state.errors.contains(Field::Email));
        assert!(state.errors.contains(Field::Name));

        state.delete_char();
        state.delete_char();
        assert_eq!(state.errors.get(Field::Email), Some("Invalid email address"));
    }

    #[test]
    fn test_live_errors_stay_on_after_failed_delivery() {
        let mut state = AppState::new();
        state.fields = FormFields::new("J", "a@b", "hi");
        let id = submitted_id(state.submit());
        state.handle_response(NetworkResponse::Failed { id, message: String::from("refused"), time_ms: 1 });

        state.focus = Focus::Name;
        state.cursor_position = state.current_input().len();
        state.delete_char();
        assert_eq!(state.errors.get(Field::Name), Some("Name is required"));
    }

    #[test]
    fn test_live_errors_off_after_successful_delivery() {
        let mut state = filled();
        let id = submitted_id(state.submit());
        state.handle_response(NetworkResponse::Delivered { id, status: 200, time_ms: 1 });

        state.focus = Focus::Email;
        type_str(&mut state, "x");
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_no_live_errors_before_first_submit() {
        let mut state = AppState::new();
        type_str(&mut state, "J");
        state.delete_char();
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_editing_respects_char_boundaries() {
        let mut state = AppState::new();
        type_str(&mut state, "Zoë");
        state.move_cursor_left();
        state.delete_char();
        assert_eq!(state.fields.name, "Zë");
        state.move_cursor_right();
        assert_eq!(state.cursor_position, "Zë".len());
    }

    #[test]
    fn test_newline_only_in_message() {
        let mut state = AppState::new();
        state.enter_newline();
        assert_eq!(state.fields.name, "");

        state.focus = Focus::Message;
        type_str(&mut state, "a");
        state.enter_newline();
        type_str(&mut state, "b");
        assert_eq!(state.fields.message, "a\nb");
    }

    #[test]
    fn test_typing_on_submit_is_ignored() {
        let mut state = AppState::new();
        state.focus = Focus::Submit;
        state.enter_char('x');
        state.delete_char();
        assert_eq!(state.fields, FormFields::default());
    }
}
