//! Field rendering utilities for forms

use crate::state::{utf16_len, Field};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Longest message the counter advertises; longer input is still accepted
pub const MESSAGE_SOFT_LIMIT: usize = 500;

/// Draw a contact form field with its inline validation error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: Field,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let accent = if error.is_some() {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let placeholder = value.is_empty();
    let display_str = if placeholder && !is_active {
        field.placeholder()
    } else {
        value
    };
    let text_style = if placeholder {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if is_active {
            if placeholder {
                lines.clear();
            }
            match lines.last_mut() {
                Some(last) => last
                    .spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan))),
                None => lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                ))),
            }
        }
        Paragraph::new(lines)
    } else {
        let shown = if is_active && placeholder { "" } else { display_str };
        Paragraph::new(Line::from(vec![
            Span::styled(shown, text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }
    if field.is_multiline() {
        block = block.title_bottom(
            Line::from(format!(" {} ", message_counter(value)))
                .alignment(Alignment::Right)
                .style(Style::default().fg(Color::DarkGray)),
        );
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Character counter shown under the message body
pub fn message_counter(message: &str) -> String {
    format!("{}/{}", utf16_len(message), MESSAGE_SOFT_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_message_counter_counts_utf16_units() {
        assert_eq!(message_counter(""), "0/500");
        assert_eq!(message_counter("héllo"), "5/500");
        assert_eq!(message_counter("hi 😀"), "5/500");
    }

    #[test]
    fn test_message_counter_past_limit() {
        assert_eq!(message_counter(&"a".repeat(612)), "612/500");
    }
}
