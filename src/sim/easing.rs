//! Scalar and angular interpolation helpers

use std::f32::consts::{PI, TAU};

/// Cubic ease-in-out over t in [0, 1]
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Signed shortest-arc difference from `a` to `b`, in [-π, π]
#[inline]
pub fn shortest_arc(a: f32, b: f32) -> f32 {
    // `%` keeps the sign of the dividend, so the result can land below -π
    let mut diff = ((b - a + PI) % TAU) - PI;
    if diff < -PI {
        diff += TAU;
    }
    diff
}

/// Interpolate angles across the wrap (never sweeps the long way around)
#[inline]
pub fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
    a + shortest_arc(a, b) * t
}
