//! Orbs, their arena, and the shared tween epoch

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::easing::{ease_in_out_cubic, lerp_angle};

/// One participant on the ring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orb {
    /// Displayed angle when the current tween began
    pub prev_angle: f32,
    /// Displayed angle this frame
    pub angle: f32,
    /// Layout slot the orb is heading to
    pub target_angle: f32,
    /// Time of the last pulse hit (ms), `None` if never hit
    pub activated_at: Option<f64>,
}

impl Orb {
    pub fn new(start_angle: f32) -> Self {
        Self {
            prev_angle: start_angle,
            angle: start_angle,
            target_angle: start_angle,
            activated_at: None,
        }
    }

    /// Begin a new leg from wherever the orb is displayed now
    pub fn retarget(&mut self, target: f32) {
        self.prev_angle = self.angle;
        self.target_angle = target;
    }

    /// Move along the shortest arc by eased progress `u`
    pub fn advance(&mut self, u: f32) {
        self.angle = lerp_angle(self.prev_angle, self.target_angle, u);
    }

    /// Finish the leg exactly on target
    pub fn settle(&mut self) {
        self.angle = self.target_angle;
        self.prev_angle = self.target_angle;
    }
}

/// What a resize changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resize {
    pub created: Range<usize>,
    pub destroyed: Range<usize>,
}

impl Resize {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.destroyed.is_empty()
    }
}

/// Orbs indexed by participant slot
#[derive(Debug, Clone, Default)]
pub struct OrbSet {
    orbs: Vec<Orb>,
}

impl OrbSet {
    pub fn new() -> Self {
        Self { orbs: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.orbs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orbs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Orb> {
        self.orbs.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Orb> {
        self.orbs.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Orb> {
        self.orbs.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Orb> {
        self.orbs.iter_mut()
    }

    /// Grow or shrink to `len`; `spawn` builds each new orb from its index
    pub fn resize(&mut self, len: usize, mut spawn: impl FnMut(usize) -> Orb) -> Resize {
        let old = self.orbs.len();
        if len > old {
            self.orbs.extend((old..len).map(&mut spawn));
            Resize {
                created: old..len,
                destroyed: len..len,
            }
        } else {
            self.orbs.truncate(len);
            Resize {
                created: len..len,
                destroyed: len..old,
            }
        }
    }

    /// Stamp a pulse hit; an index that isn't materialized yet is ignored
    pub fn activate(&mut self, index: usize, now_ms: f64) -> bool {
        match self.orbs.get_mut(index) {
            Some(orb) => {
                orb.activated_at = Some(now_ms);
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a OrbSet {
    type Item = &'a Orb;
    type IntoIter = std::slice::Iter<'a, Orb>;

    fn into_iter(self) -> Self::IntoIter {
        self.orbs.iter()
    }
}

/// Scene-wide tween epoch shared by every orb
#[derive(Debug, Clone)]
pub struct Tween {
    pub start_ms: f64,
    pub duration_ms: f64,
    pub active: bool,
}

impl Tween {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            start_ms: 0.0,
            duration_ms,
            active: false,
        }
    }

    pub fn start(&mut self, now_ms: f64) {
        self.start_ms = now_ms;
        self.active = true;
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms.is_nan() || self.duration_ms <= 0.0 {
            return 1.0;
        }
        let t = (now_ms - self.start_ms) / self.duration_ms;
        if t.is_nan() {
            return 1.0;
        }
        t.clamp(0.0, 1.0) as f32
    }

    /// Advance every orb; returns true while the tween is still running
    pub fn step(&mut self, orbs: &mut OrbSet, now_ms: f64) -> bool {
        if !self.active {
            return false;
        }

        let t = self.progress(now_ms);
        if t >= 1.0 {
            for orb in orbs.iter_mut() {
                orb.settle();
            }
            self.active = false;
            return false;
        }

        let u = ease_in_out_cubic(t);
        for orb in orbs.iter_mut() {
            orb.advance(u);
        }
        true
    }
}
