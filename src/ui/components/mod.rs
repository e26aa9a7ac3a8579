//! Reusable UI components

mod banner;
mod button;

pub use banner::{render_banner, BannerKind};
pub use button::{render_button, BUTTON_HEIGHT};
