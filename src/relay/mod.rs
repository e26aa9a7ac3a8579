//! Mail relay module for EmailJS communication

mod client;
mod error;
mod traits;

pub use client::EmailJsClient;
pub use error::RelayError;
pub use traits::{RelayClient, RelayResponse, TemplateParams};

#[cfg(test)]
pub use traits::MockRelayClient;
