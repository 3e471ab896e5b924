//! Ring layout: evenly spaced angular slots

use std::f32::consts::TAU;

use crate::consts::START_ANGLE;

/// Slot angles for `n` orbs starting at [`START_ANGLE`]
pub fn layout_angles(n: usize) -> Vec<f32> {
    layout_angles_from(n, START_ANGLE)
}

/// Slot angles for `n` orbs, slot 0 at `start`
pub fn layout_angles_from(n: usize, start: f32) -> Vec<f32> {
    let denom = n.max(1) as f32;
    (0..n).map(|i| (i as f32 / denom) * TAU + start).collect()
}
