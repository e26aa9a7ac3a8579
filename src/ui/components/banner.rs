//! Result banner shown after a submission

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Failure,
}

impl BannerKind {
    fn color(self) -> Color {
        match self {
            BannerKind::Success => Color::Green,
            BannerKind::Failure => Color::Red,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            BannerKind::Success => "✓",
            BannerKind::Failure => "✗",
        }
    }
}

/// Render a bordered one-message banner, with an optional dim suffix
pub fn render_banner(
    frame: &mut Frame,
    area: Rect,
    kind: BannerKind,
    message: &str,
    suffix: Option<&str>,
) {
    let color = kind.color();
    let mut spans = vec![
        Span::styled(
            format!("{} ", kind.icon()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message, Style::default().fg(color)),
    ];
    if let Some(suffix) = suffix {
        spans.push(Span::styled(
            format!("  {suffix}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
