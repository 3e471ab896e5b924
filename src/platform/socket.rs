//! WebSocket transport to the relay
//!
//! Inbound frames are decoded and queued on the scene; nothing touches scene
//! state from inside a socket callback.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

use crate::error::ProtocolError;
use crate::net::{Transport, WireMessage};
use crate::sim::{EventSender, SceneEvent};

pub struct WebSocketTransport {
    ws: WebSocket,
    // Kept alive for as long as the socket is
    _handlers: Vec<Closure<dyn FnMut(JsValue)>>,
}

impl WebSocketTransport {
    /// Open `url` and forward everything it delivers to `events`
    pub fn connect(url: &str, events: EventSender) -> Result<Self, JsValue> {
        let ws = WebSocket::new(url)?;
        let mut handlers = Vec::new();

        {
            let events = events.clone();
            let on_open = Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| {
                events.send(SceneEvent::Connected { id: None });
            });
            ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
            handlers.push(on_open);
        }

        {
            let events = events.clone();
            let on_message = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                let Some(text) = event
                    .dyn_ref::<MessageEvent>()
                    .and_then(|m| m.data().as_string())
                else {
                    log::warn!("Ignoring non-text relay frame");
                    return;
                };
                match WireMessage::decode(&text) {
                    Ok(msg) => {
                        events.send(msg.into_event());
                    }
                    Err(e) => log::warn!("Dropping relay frame: {}", e),
                }
            });
            ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
            handlers.push(on_message);
        }

        {
            let events = events.clone();
            let on_close = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                if let Some(close) = event.dyn_ref::<CloseEvent>() {
                    log::info!("Relay closed (code {})", close.code());
                }
                events.send(SceneEvent::Disconnected);
            });
            ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));
            handlers.push(on_close);
        }

        {
            let on_error = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                if event.dyn_ref::<Event>().is_some() {
                    log::error!("Relay socket error");
                }
            });
            ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));
            handlers.push(on_error);
        }

        Ok(Self {
            ws,
            _handlers: handlers,
        })
    }
}

impl Transport for WebSocketTransport {
    fn send(&mut self, msg: &WireMessage) -> Result<(), ProtocolError> {
        if self.ws.ready_state() != WebSocket::OPEN {
            return Err(ProtocolError::Send("socket not open".into()));
        }
        let text = msg.encode()?;
        self.ws
            .send_with_str(&text)
            .map_err(|e| ProtocolError::Send(format!("{:?}", e)))
    }
}

impl Drop for WebSocketTransport {
    fn drop(&mut self) {
        self.ws.set_onopen(None);
        self.ws.set_onmessage(None);
        self.ws.set_onclose(None);
        self.ws.set_onerror(None);
        let _ = self.ws.close();
    }
}
