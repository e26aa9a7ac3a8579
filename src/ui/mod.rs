//! UI module for rendering the TUI

mod components;
mod contact_info;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (form_area, info_area) = layout::create_layout(area);

    forms::draw_contact_form(frame, form_area, app);
    if let Some(info_area) = info_area {
        contact_info::draw(frame, info_area, app);
    }

    layout::draw_status_bar(frame, app);
}
