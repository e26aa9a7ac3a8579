//! Owner contact details shown beside the form

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}

fn detail(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().fg(Color::Gray)))
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let owner = &app.config.owner;

    let lines = vec![
        heading("Email"),
        detail(&owner.email),
        Line::from(""),
        heading("Location"),
        detail(&owner.location),
        Line::from(""),
        heading("Connect With Me"),
        Line::from(vec![
            Span::styled("in ", Style::default().fg(Color::Blue)),
            Span::styled(owner.linkedin_url.as_str(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("gh ", Style::default().fg(Color::Blue)),
            Span::styled(owner.github_url.as_str(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Green)),
            Span::styled(
                "Available for Work",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        detail("Open to freelance projects and full-time opportunities"),
    ];

    let block = Block::default()
        .title(" Contact Information ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
