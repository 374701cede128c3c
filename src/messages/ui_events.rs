//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::Field;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Focus navigation
    NextFocus,
    PrevFocus,

    // Input editing
    CharInput(char),
    Newline,
    Backspace,
    CursorLeft,
    CursorRight,

    // Form actions
    Submit,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focusable element of the form (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Focus {
    #[default]
    Name,
    Email,
    Message,
    Submit,
}

impl Focus {
    pub fn next(&self) -> Focus {
        match self {
            Focus::Name => Focus::Email,
            Focus::Email => Focus::Message,
            Focus::Message => Focus::Submit,
            Focus::Submit => Focus::Name,
        }
    }

    pub fn prev(&self) -> Focus {
        match self {
            Focus::Name => Focus::Submit,
            Focus::Email => Focus::Name,
            Focus::Message => Focus::Email,
            Focus::Submit => Focus::Message,
        }
    }

    /// The input field under focus, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            Focus::Name => Some(Field::Name),
            Focus::Email => Some(Field::Email),
            Focus::Message => Some(Field::Message),
            Focus::Submit => None,
        }
    }
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, focus: Focus, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts; Ctrl+Alt is AltGr on Windows and falls through as text
    if key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('s') if !show_help => Some(UiEvent::Submit),
            _ => None,
        };
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::F(1) => Some(UiEvent::ToggleHelp),
        KeyCode::Tab | KeyCode::Down => Some(UiEvent::NextFocus),
        KeyCode::BackTab | KeyCode::Up => Some(UiEvent::PrevFocus),
        KeyCode::Enter => match focus {
            Focus::Name | Focus::Email => Some(UiEvent::NextFocus),
            Focus::Message => Some(UiEvent::Newline),
            Focus::Submit => Some(UiEvent::Submit),
        },
        KeyCode::Char(' ') if focus == Focus::Submit => Some(UiEvent::Submit),
        KeyCode::Char(c) if focus != Focus::Submit => Some(UiEvent::CharInput(c)),
        KeyCode::Backspace if focus != Focus::Submit => Some(UiEvent::Backspace),
        KeyCode::Left if focus != Focus::Submit => Some(UiEvent::CursorLeft),
        KeyCode::Right if focus != Focus::Submit => Some(UiEvent::CursorRight),
        _ => None,
    }
}
