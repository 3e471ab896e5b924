//! JSON frames exchanged with the relay
//!
//! `{"event":"updateUserCount","data":{"count":3}}`
//! `{"event":"mouse","data":{"x":10.0,"y":20.0}}`

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;
use crate::sim::SceneEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountMessage {
    /// Signed on the wire; the scene clamps negatives
    pub count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorMessage {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum WireMessage {
    UpdateUserCount(CountMessage),
    Mouse(CursorMessage),
}

impl WireMessage {
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(text).map_err(ProtocolError::Decode)
    }

    pub fn encode(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encode)
    }

    pub fn into_event(self) -> SceneEvent {
        match self {
            WireMessage::UpdateUserCount(CountMessage { count }) => SceneEvent::Count { count },
            WireMessage::Mouse(CursorMessage { x, y }) => SceneEvent::Cursor { x, y },
        }
    }
}
