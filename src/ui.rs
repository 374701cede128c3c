//! Drawing functions - render a `RenderState` into a ratatui frame

use ratatui::{prelude::*, widgets::*};

use crate::constants::APP_NAME;
use crate::messages::ui_events::Focus;
use crate::messages::RenderState;
use crate::models::{FeedbackKind, Field};

/// Visible text rows inside the message box
const MESSAGE_ROWS: u16 = 4;

/// Widest the form grows on large terminals
const FORM_MAX_WIDTH: u16 = 64;

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let form_area = centered_column(FORM_MAX_WIDTH, outer[0]);
    draw_form(f, state, form_area);
    draw_status_bar(f, state, outer[1]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                // Title
            Constraint::Length(3),                // Name
            Constraint::Length(1),                // Name error
            Constraint::Length(3),                // Email
            Constraint::Length(1),                // Email error
            Constraint::Length(MESSAGE_ROWS + 2), // Message
            Constraint::Length(1),                // Message error
            Constraint::Length(3),                // Submit
            Constraint::Length(1),                // Feedback
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(APP_NAME)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).bold());
    f.render_widget(title, chunks[0]);

    render_field(f, state, Field::Name, chunks[1], chunks[2]);
    render_field(f, state, Field::Email, chunks[3], chunks[4]);
    render_field(f, state, Field::Message, chunks[5], chunks[6]);
    draw_submit_button(f, state, chunks[7]);
    draw_feedback(f, state, chunks[8]);
}

/// Draw a labelled input and, when it has one, its inline error below it
pub fn render_field(f: &mut Frame, state: &RenderState, field: Field, input_area: Rect, error_area: Rect) {
    let is_focused = state.focus.field() == Some(field);
    let has_error = state.errors.contains(field);

    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else if has_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", field.label()));

    let value = state.fields.get(field);
    let (cursor_row, cursor_col) = cursor_row_col(value, state.cursor_position);
    let scroll = if field.is_multiline() {
        cursor_row.saturating_sub(MESSAGE_ROWS - 1)
    } else {
        0
    };

    let input = Paragraph::new(value)
        .block(block)
        .scroll((scroll, 0));
    f.render_widget(input, input_area);

    if let Some(message) = state.errors.get(field) {
        let error = Paragraph::new(message).style(Style::default().fg(Color::Red));
        f.render_widget(error, error_area);
    }

    // Cursor
    if is_focused && !state.show_help {
        let (cursor_x, cursor_y) = cursor_screen_position(input_area, cursor_row - scroll, cursor_col);
        f.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

/// Terminal cell for a cursor inside a bordered input, clamped to its interior
fn cursor_screen_position(input_area: Rect, row: u16, col: u16) -> (u16, u16) {
    let max_x = input_area.x.saturating_add(input_area.width.saturating_sub(2));
    let max_y = input_area.y.saturating_add(input_area.height.saturating_sub(2));
    let x = input_area.x.saturating_add(col).saturating_add(1).min(max_x);
    let y = input_area.y.saturating_add(row).saturating_add(1).min(max_y);
    (x, y)
}

/// Row and column of a byte cursor, counting columns in chars
fn cursor_row_col(text: &str, cursor: usize) -> (u16, u16) {
    let before = text.get(..cursor).unwrap_or(text);
    let row = before.matches('\n').count();
    let col = before.rsplit('\n').next().map(|l| l.chars().count()).unwrap_or(0);
    (
        u16::try_from(row).unwrap_or(u16::MAX),
        u16::try_from(col).unwrap_or(u16::MAX),
    )
}

fn draw_submit_button(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.focus == Focus::Submit;

    let style = if state.submit_disabled() {
        Style::default().fg(Color::DarkGray)
    } else if is_focused {
        Style::default().fg(Color::Black).bg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Cyan).bold()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if is_focused && !state.submit_disabled() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    let button = Paragraph::new(Span::styled(state.submit_label(), style))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(button, area);
}

fn draw_feedback(f: &mut Frame, state: &RenderState, area: Rect) {
    if let Some(feedback) = &state.feedback {
        let color = match feedback.kind {
            FeedbackKind::Success => Color::Green,
            FeedbackKind::Error => Color::Red,
        };
        let line = Paragraph::new(feedback.text.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));
        f.render_widget(line, area);
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = if state.is_submitting {
        String::from(" Sending... ")
    } else {
        String::from(" Tab:next field | Enter:next/submit | Ctrl+S:send | F1:help | Ctrl+C:quit ")
    };

    let status = match &state.feedback {
        Some(feedback) => format!("{}| last result {} ", hints, feedback.at.format("%H:%M:%S")),
        None => hints,
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 CONTACT FORM - Keyboard Shortcuts

 NAVIGATION
   Tab / ↓            Next field
   Shift+Tab / ↑      Previous field
   ← / →              Move cursor

 EDITING
   Enter              Next field (Name, Email)
                      New line (Message)
   Backspace          Delete character

 SENDING
   Enter / Space      Send (on the button)
   Ctrl+S             Send from anywhere

 GENERAL
   F1                 Toggle this help
   Ctrl+C / Ctrl+Q    Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

/// Horizontally center a column no wider than `max_width`
fn centered_column(max_width: u16, r: Rect) -> Rect {
    let width = r.width.min(max_width);
    Rect {
        x: r.x + (r.width - width) / 2,
        width,
        ..r
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
