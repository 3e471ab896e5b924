//! Orb Ring - A shared participant ring visualization
//!
//! Core modules:
//! - `sim`: Frame-driven ring state (layout, projection, tweening, pulse)
//! - `renderer`: Draw commands emitted once per frame
//! - `net`: Wire protocol and transport seam for the relay
//! - `platform`: Browser glue (canvas, WebSocket, clock)
//! - `settings`: Scene configuration

pub mod error;
pub mod net;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ProtocolError;
pub use settings::SceneConfig;

use glam::Vec2;

/// Visualization constants
pub mod consts {
    use std::f32::consts::PI;

    /// Layout slot 0 sits at the bottom of the ring (screen y grows down)
    pub const START_ANGLE: f32 = PI / 2.0;

    /// Node-count transition duration (ms)
    pub const TWEEN_MS: f64 = 450.0;

    /// Pulse dwell per node (ms); one revolution takes `count * PULSE_INTERVAL_MS`
    pub const PULSE_INTERVAL_MS: f64 = 500.0;
    /// Time-width of the trail behind the pulse head (ms of travel)
    pub const TRAIL_WINDOW_MS: f64 = 1500.0;
    /// Segments in the pulse trail
    pub const TRAIL_SAMPLES: usize = 80;
    /// Pulse head marker size
    pub const HEAD_SIZE: f32 = 14.0;

    /// Ring tilt away from the viewer (0 = flat, ~0.45π ≈ 81°)
    pub const TILT: f32 = PI * 0.45;
    /// Orb size when closest
    pub const ORB_SIZE_NEAR: f32 = 62.0;
    /// Orb size when farthest
    pub const ORB_SIZE_FAR: f32 = 28.0;

    /// Glow decay after a pulse hit (ms)
    pub const GLOW_WINDOW_MS: f64 = 300.0;
    /// Extra size at full glow (fraction of the depth size)
    pub const GLOW_SIZE_BOOST: f32 = 0.35;

    /// Ring radius as a fraction of viewport width
    pub const RADIUS_FRACTION: f32 = 0.4;
    /// Radius used before the first resize
    pub const DEFAULT_RADIUS: f32 = 200.0;

    /// Remote/local cursor mark diameter
    pub const CURSOR_MARK_SIZE: f32 = 20.0;
    /// Ring guide stroke width
    pub const RING_STROKE_WIDTH: f32 = 4.0;
    /// Background grey level
    pub const BACKGROUND_GREY: u8 = 240;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
