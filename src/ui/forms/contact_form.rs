//! Contact form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{Field, SubmissionStatus, SEND_ROW};
use crate::ui::components::{render_banner, render_button, BannerKind, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const SUCCESS_TEXT: &str = "Message sent successfully! I'll get back to you soon.";
const PRIVACY_TEXT: &str = "Your information is secure and will never be shared with third parties.";

/// Banner text after a failed send, naming the manual fallback address
fn failure_text(owner_email: &str) -> String {
    format!("Failed to send message. Please try again or email me directly at {owner_email}")
}

/// Draw the contact form with its send button, result banner and footer
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let show_banner = form.status() != SubmissionStatus::Idle;

    let block = Block::default()
        .title(" Send Me a Message ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if form.is_send_row_active() {
            Color::DarkGray
        } else {
            Color::Cyan
        }));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Subject
            Constraint::Min(6),    // Message
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(if show_banner { 3 } else { 0 }),
            Constraint::Length(1), // Privacy footer
        ])
        .margin(1)
        .split(area);

    for field in Field::ALL {
        draw_field(
            frame,
            chunks[field.index()],
            field,
            form.fields().get(field),
            form.active_field() == Some(field),
            form.errors().get(field),
        );
    }

    let label = if form.is_submitting() {
        format!("{} Sending Message...", SPINNER[app.tick % SPINNER.len()])
    } else {
        "Send Message".to_string()
    };
    render_button(
        frame,
        chunks[SEND_ROW],
        &label,
        form.active_field_index == SEND_ROW,
        !form.is_submitting(),
    );

    if show_banner {
        let finished = form
            .last_finished_at()
            .map(|at| at.format("%H:%M:%S").to_string());
        match form.status() {
            SubmissionStatus::Success => render_banner(
                frame,
                chunks[5],
                BannerKind::Success,
                SUCCESS_TEXT,
                finished.as_deref(),
            ),
            SubmissionStatus::Error => render_banner(
                frame,
                chunks[5],
                BannerKind::Failure,
                &failure_text(&app.config.owner.email),
                finished.as_deref(),
            ),
            SubmissionStatus::Idle => {}
        }
    }

    let footer = Paragraph::new(PRIVACY_TEXT)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[6]);
}
