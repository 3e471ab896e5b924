//! Tilted-ring projection
//!
//! The ring lies in the screen plane and is rotated about the horizontal axis
//! by `tilt`. A ring point `(R cos a, R sin a)` keeps its x, its y compresses
//! by `cos(tilt)`, and `y sin(tilt)` becomes depth.
//!
//! Depth convention: larger depth = closer to the viewer. Screen y grows
//! downward, so the lower half of the ellipse is the front of the ring.
//! Orb size grows with depth and draw order is ascending depth (far first).

use glam::Vec2;

use super::easing::lerp;
use crate::consts::{DEFAULT_RADIUS, ORB_SIZE_FAR, ORB_SIZE_NEAR, TILT};
use crate::polar_to_cartesian;

/// A ring angle after projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedNode {
    /// Draw position relative to the ring center
    pub pos: Vec2,
    /// Larger is closer
    pub depth: f32,
    /// Normalized depth (0 = back, 1 = front)
    pub t: f32,
    /// Diameter at this depth
    pub size: f32,
}

#[derive(Debug, Clone)]
pub struct Projector {
    radius: f32,
    tilt: f32,
    size_near: f32,
    size_far: f32,
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(TILT)
    }
}

impl Projector {
    pub fn new(tilt: f32) -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            tilt,
            size_near: ORB_SIZE_NEAR,
            size_far: ORB_SIZE_FAR,
        }
    }

    /// Override the near/far orb sizes
    pub fn with_sizes(mut self, near: f32, far: f32) -> Self {
        self.size_near = near;
        self.size_far = far;
        self
    }

    /// Set ring radius (clamped to at least 1)
    pub fn set_radius(&mut self, r: f32) {
        self.radius = if r.is_nan() { 1.0 } else { r.max(1.0) };
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn tilt(&self) -> f32 {
        self.tilt
    }

    /// Vertical extent of the ring silhouette
    pub fn ellipse_height(&self) -> f32 {
        self.radius * 2.0 * self.tilt.cos()
    }

    pub fn project(&self, theta: f32) -> ProjectedNode {
        let r = self.radius;
        let Vec2 { x, y } = polar_to_cartesian(r, theta);

        let (sin_tilt, cos_tilt) = self.tilt.sin_cos();
        let depth = y * sin_tilt;

        // Depth spans [-R sin(tilt), R sin(tilt)]
        let depth_min = -r * sin_tilt;
        let depth_range = 2.0 * r * sin_tilt;
        let t = ((depth - depth_min) / depth_range.max(1.0)).clamp(0.0, 1.0);

        ProjectedNode {
            pos: Vec2::new(x, y * cos_tilt),
            depth,
            t,
            size: lerp(self.size_far, self.size_near, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_radius_clamped() {
        let mut p = Projector::default();
        p.set_radius(0.0);
        assert_eq!(p.radius(), 1.0);
        p.set_radius(-50.0);
        assert_eq!(p.radius(), 1.0);
        p.set_radius(320.0);
        assert_eq!(p.radius(), 320.0);
    }

    #[test]
    fn test_front_and_back_extremes() {
        let mut p = Projector::default();
        p.set_radius(100.0);

        // Bottom of the ring (screen y positive) is the front
        let front = p.project(PI / 2.0);
        assert!((front.t - 1.0).abs() < 1e-4);
        assert!((front.size - ORB_SIZE_NEAR).abs() < 1e-3);

        let back = p.project(-PI / 2.0);
        assert!(back.t.abs() < 1e-4);
        assert!((back.size - ORB_SIZE_FAR).abs() < 1e-3);

        assert!(front.depth > back.depth);
    }

    #[test]
    fn test_flat_ring() {
        let mut p = Projector::new(0.0);
        p.set_radius(100.0);

        for i in 0..12 {
            let theta = i as f32 * PI / 6.0;
            let n = p.project(theta);
            assert!((n.pos.y - 100.0 * theta.sin()).abs() < 1e-3);
            assert_eq!(n.depth, 0.0);
            assert_eq!(n.t, 0.0);
            assert_eq!(n.size, ORB_SIZE_FAR);
        }
        assert!((p.ellipse_height() - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_ellipse_height_compressed() {
        let mut p = Projector::default();
        p.set_radius(100.0);
        let expected = 200.0 * TILT.cos();
        assert!((p.ellipse_height() - expected).abs() < 1e-3);
        assert!(p.ellipse_height() < 200.0);
    }
}
