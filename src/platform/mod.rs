//! Platform abstraction layer
//!
//! Browser glue for the ring:
//! - Time (`performance.now()`)
//! - Drawing frames onto a 2D canvas
//! - WebSocket connection to the relay

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod socket;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
#[cfg(target_arch = "wasm32")]
pub use socket::WebSocketTransport;

/// Monotonic milliseconds
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
