//! Inbound events and the queue that feeds them to the scene
//!
//! Transport callbacks push through a cloned [`EventSender`] whenever they
//! fire; the scene drains the queue at the top of each frame so nothing is
//! applied while a frame is being computed.

use std::sync::mpsc::{Receiver, Sender, channel};

/// Something delivered by the relay (or the local input layer)
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    /// Participant count changed (negative values clamp to zero)
    Count { count: i64 },
    /// A peer's cursor position, drawn as-is
    Cursor { x: f32, y: f32 },
    /// Transport connected
    Connected { id: Option<String> },
    /// Transport dropped
    Disconnected,
}

/// Cloneable handle for pushing events into a scene
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: Sender<SceneEvent>,
}

impl EventSender {
    /// Queue an event; returns false if the scene is gone
    pub fn send(&self, event: SceneEvent) -> bool {
        if let Err(e) = self.tx.send(event) {
            log::warn!("scene dropped, discarding event: {:?}", e.0);
            return false;
        }
        true
    }
}

#[derive(Debug)]
pub(crate) struct EventQueue {
    tx: Sender<SceneEvent>,
    rx: Receiver<SceneEvent>,
}

impl EventQueue {
    pub(crate) fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    pub(crate) fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
        }
    }

    /// Everything queued so far, in arrival order
    pub(crate) fn drain(&self) -> Vec<SceneEvent> {
        self.rx.try_iter().collect()
    }
}
