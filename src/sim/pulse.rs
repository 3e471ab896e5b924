//! Pulse: a highlight orbiting the ring at constant angular velocity
//!
//! One revolution takes `count * interval_ms`, so the head spends exactly one
//! interval in each layout slot. Slot arrivals are derived from elapsed time,
//! not accumulated, so a late frame skips slots instead of replaying them.

use std::f64::consts::TAU;

use crate::consts::PULSE_INTERVAL_MS;

#[derive(Debug, Clone)]
pub struct Pulse {
    interval_ms: f64,
    start_ms: f64,
    base_angle: f32,
    last_index: Option<usize>,
}

impl Default for Pulse {
    fn default() -> Self {
        Self::new(PULSE_INTERVAL_MS)
    }
}

impl Pulse {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(f64::MIN_POSITIVE),
            start_ms: 0.0,
            base_angle: 0.0,
            last_index: None,
        }
    }

    /// Restart the sweep at `now_ms` with the head on `base_angle`
    pub fn reset(&mut self, now_ms: f64, base_angle: f32) {
        self.start_ms = now_ms;
        self.base_angle = base_angle;
        self.last_index = None;
    }

    #[inline]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Slot most recently hit since the last reset
    #[inline]
    pub fn last_index(&self) -> Option<usize> {
        self.last_index
    }

    /// Radians per millisecond; zero with nothing to visit
    pub fn angular_velocity(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        TAU / (count as f64 * self.interval_ms)
    }

    fn elapsed(&self, now_ms: f64) -> f64 {
        (now_ms - self.start_ms).max(0.0)
    }

    /// Head angle at `now_ms`, wrapped into [0, 2π)
    pub fn angle(&self, now_ms: f64, count: usize) -> f32 {
        if count == 0 {
            return self.base_angle;
        }
        let a = self.base_angle as f64 + self.angular_velocity(count) * self.elapsed(now_ms);
        a.rem_euclid(TAU) as f32
    }

    /// Fire `on_hit` once when the head moves into a new slot
    pub fn update(&mut self, now_ms: f64, count: usize, mut on_hit: impl FnMut(usize)) {
        if count == 0 {
            return;
        }
        let step = (self.elapsed(now_ms) / self.interval_ms).floor() as u64;
        let index = (step % count as u64) as usize;
        if self.last_index != Some(index) {
            self.last_index = Some(index);
            on_hit(index);
        }
    }

    /// Sampled arc behind the head, oldest first and ending on the head
    ///
    /// Covers `window_ms` of travel (at most one revolution) with
    /// `samples + 1` points. Empty when there is nothing to orbit.
    pub fn trail_angles(
        &self,
        now_ms: f64,
        count: usize,
        window_ms: f64,
        samples: usize,
    ) -> Vec<f32> {
        let w = self.angular_velocity(count);
        if w == 0.0 || samples == 0 {
            return Vec::new();
        }

        let head = self.angle(now_ms, count) as f64;
        // Never sweep further back than the time since reset
        let span = (w * window_ms.min(self.elapsed(now_ms))).min(TAU);

        (0..=samples)
            .map(|k| {
                let behind = span * (1.0 - k as f64 / samples as f64);
                (head - behind) as f32
            })
            .collect()
    }
}

/// Ease-out glow after a pulse hit: 1 at the hit, 0 once `window_ms` passes
pub fn glow_intensity(activated_at: Option<f64>, now_ms: f64, window_ms: f64) -> f32 {
    let Some(at) = activated_at else {
        return 0.0;
    };
    let elapsed = (now_ms - at).max(0.0);
    if elapsed >= window_ms {
        return 0.0;
    }
    let k = (window_ms - elapsed) / window_ms;
    (k * k) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angular_velocity_full_turn() {
        let pulse = Pulse::new(500.0);
        for count in 1..20 {
            let w = pulse.angular_velocity(count);
            assert!((w * count as f64 * 500.0 - TAU).abs() < 1e-9);
        }
        assert_eq!(pulse.angular_velocity(0), 0.0);
    }

    #[test]
    fn test_angle_with_no_orbs_is_base() {
        let mut pulse = Pulse::new(500.0);
        pulse.reset(0.0, 1.25);
        assert_eq!(pulse.angle(9999.0, 0), 1.25);
    }

    #[test]
    fn test_angle_wrapped() {
        let mut pulse = Pulse::new(500.0);
        pulse.reset(0.0, 0.0);
        // Two slots of four = half a turn
        assert!((pulse.angle(1000.0, 4) - std::f32::consts::PI).abs() < 1e-5);
        // Many turns later the angle stays in range
        let a = pulse.angle(1_000_000.25, 3);
        assert!((0.0..std::f32::consts::TAU).contains(&a));
    }

    #[test]
    fn test_update_fires_once_per_slot() {
        let mut pulse = Pulse::new(500.0);
        pulse.reset(0.0, 0.0);
        let mut hits = Vec::new();

        for frame in 0..=120 {
            pulse.update(frame as f64 * 16.0, 3, |i| hits.push(i));
        }
        // 1920 ms covers slots 0,1,2,0
        assert_eq!(hits, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_update_skips_missed_slots() {
        let mut pulse = Pulse::new(500.0);
        pulse.reset(0.0, 0.0);
        let mut hits = Vec::new();

        pulse.update(0.0, 5, |i| hits.push(i));
        // Delayed frame jumps from slot 0 straight to slot 3
        pulse.update(1600.0, 5, |i| hits.push(i));
        assert_eq!(hits, vec![0, 3]);
    }

    #[test]
    fn test_update_without_orbs_does_nothing() {
        let mut pulse = Pulse::new(500.0);
        pulse.update(100.0, 0, |_| panic!("no slots to hit"));
        assert_eq!(pulse.last_index(), None);
    }

    #[test]
    fn test_glow_decay() {
        assert_eq!(glow_intensity(None, 100.0, 300.0), 0.0);
        assert_eq!(glow_intensity(Some(100.0), 100.0, 300.0), 1.0);
        assert!((glow_intensity(Some(100.0), 250.0, 300.0) - 0.25).abs() < 1e-6);
        assert_eq!(glow_intensity(Some(100.0), 400.0, 300.0), 0.0);
        assert_eq!(glow_intensity(Some(100.0), 9000.0, 300.0), 0.0);
    }

    #[test]
    fn test_trail_ends_on_head() {
        let mut pulse = Pulse::new(500.0);
        pulse.reset(0.0, 0.0);
        let now = 5000.0;
        let trail = pulse.trail_angles(now, 6, 1500.0, 80);
        assert_eq!(trail.len(), 81);
        let head = pulse.angle(now, 6);
        assert!((trail[80] - head).abs() < 1e-5);

        // 1500 ms at 6 * 500 ms per turn is half a revolution
        let span = trail[80] - trail[0];
        assert!((span - std::f32::consts::PI).abs() < 1e-4);
    }

    #[test]
    fn test_trail_clamped_to_one_turn() {
        let mut pulse = Pulse::new(500.0);
        pulse.reset(0.0, 0.0);
        let trail = pulse.trail_angles(10_000.0, 1, 1500.0, 80);
        let span = trail[80] - trail[0];
        assert!(span <= std::f32::consts::TAU + 1e-4);
        assert!(pulse.trail_angles(10_000.0, 0, 1500.0, 80).is_empty());
    }
}
