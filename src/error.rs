//! Errors at the transport edge
//!
//! The ring itself never fails: degenerate counts, radii and durations are
//! clamped. Only wire frames and socket sends can go wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed wire frame: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode wire frame: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("transport send failed: {0}")]
    Send(String),
}
