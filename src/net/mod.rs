//! Relay plumbing
//!
//! The relay itself lives outside this crate. This module only knows the
//! frames it speaks and the seam a concrete socket plugs into.

pub mod protocol;

pub use protocol::{CountMessage, CursorMessage, WireMessage};

use crate::error::ProtocolError;

/// Outbound side of a relay connection
pub trait Transport {
    fn send(&mut self, msg: &WireMessage) -> Result<(), ProtocolError>;
}

/// Broadcast the local cursor, logging rather than failing the input handler
pub fn emit_cursor<T: Transport + ?Sized>(transport: &mut T, cursor: CursorMessage) {
    if let Err(e) = transport.send(&WireMessage::Mouse(cursor)) {
        log::warn!("cursor not sent: {e}");
    }
}
