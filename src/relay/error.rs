//! Relay failure types

use thiserror::Error;

/// Why a relay call did not deliver the message
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request never got a response (DNS, TLS, connection, timeout)
    #[error("relay transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The relay answered with a non-success status
    #[error("relay rejected the message (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },

    /// The task running the relay call ended without a result
    #[error("relay call aborted: {0}")]
    Aborted(String),
}
