//! Layout components (form, info panel, status bar)

use crate::app::App;
use crate::platform::{COPY_EMAIL_SHORTCUT, SEND_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the contact information panel
const INFO_PANEL_WIDTH: u16 = 36;

/// Split the screen into form and info panel, reserving the status bar line.
/// Narrow terminals drop the info panel.
pub fn create_layout(area: Rect) -> (Rect, Option<Rect>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    if rows[0].width < 50 + INFO_PANEL_WIDTH {
        return (rows[0], None);
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(50),                   // Form
            Constraint::Length(INFO_PANEL_WIDTH), // Info panel
        ])
        .split(rows[0]);

    (columns[0], Some(columns[1]))
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    let indicator = if app.form.is_submitting() {
        Span::styled(" ● ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    spans.push(Span::styled(hints(), Style::default().fg(Color::Gray)));

    // Copy/save message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

fn hints() -> String {
    format!("Tab:next  {SEND_SHORTCUT}:send  {COPY_EMAIL_SHORTCUT}:copy email  ^O:save config")
}
