//! Draw commands
//!
//! The scene emits one [`Frame`] per tick in screen coordinates; a
//! [`Renderer`] turns it into pixels. Orbs are already in back-to-front order.

pub mod shapes;

use glam::Vec2;
use serde::Serialize;

pub use shapes::{orb_color, trail_segments};

/// Tilted ring outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingGuide {
    pub center: Vec2,
    pub radius_x: f32,
    /// Half of the tilt-compressed vertical extent
    pub radius_y: f32,
}

/// One projected orb
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbSprite {
    /// Slot index in layout order
    pub index: usize,
    pub pos: Vec2,
    /// Diameter, glow boost included
    pub size: f32,
    /// Larger is closer
    pub depth: f32,
    /// Color modulation (0 = base, 1 = full highlight)
    pub glow: f32,
}

/// A piece of the pulse trail
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrailSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
}

/// Leading point of the pulse
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeadMarker {
    pub pos: Vec2,
    pub size: f32,
}

/// A cursor position to draw this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CursorMark {
    pub pos: Vec2,
    pub size: f32,
}

/// Everything drawn in one tick
#[derive(Debug, Clone, Default, Serialize)]
pub struct Frame {
    pub viewport: Vec2,
    pub ring: Option<RingGuide>,
    pub orbs: Vec<OrbSprite>,
    pub trail: Vec<TrailSegment>,
    pub head: Option<HeadMarker>,
    pub cursors: Vec<CursorMark>,
}

/// Sink for frames (canvas in the browser, a log line natively)
pub trait Renderer {
    fn draw(&mut self, frame: &Frame);
}
