//! Scene configuration
//!
//! Read once when a scene is built; nothing here changes while it runs.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tuning for one scene instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    // === Layout ===
    /// Angle of layout slot 0 (radians)
    pub start_angle: f32,
    /// Ring radius as a fraction of viewport width
    pub radius_fraction: f32,

    // === Projection ===
    /// Tilt away from the viewer (radians, 0 = flat)
    pub tilt: f32,
    /// Orb size at the front of the ring
    pub orb_size_near: f32,
    /// Orb size at the back of the ring
    pub orb_size_far: f32,

    // === Timing (ms) ===
    /// Node-count transition duration
    pub tween_ms: f64,
    /// Pulse dwell per node
    pub pulse_interval_ms: f64,
    /// Trail time-width behind the pulse head
    pub trail_window_ms: f64,
    /// Glow decay window after a pulse hit
    pub glow_window_ms: f64,

    // === Rendering aids ===
    /// Trail segment count
    pub trail_samples: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            start_angle: START_ANGLE,
            radius_fraction: RADIUS_FRACTION,

            tilt: TILT,
            orb_size_near: ORB_SIZE_NEAR,
            orb_size_far: ORB_SIZE_FAR,

            tween_ms: TWEEN_MS,
            pulse_interval_ms: PULSE_INTERVAL_MS,
            trail_window_ms: TRAIL_WINDOW_MS,
            glow_window_ms: GLOW_WINDOW_MS,

            trail_samples: TRAIL_SAMPLES,
        }
    }
}

impl SceneConfig {
    /// Parse a (possibly partial) JSON config; missing fields use defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Clamp degenerate values so the scene can always animate
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !self.start_angle.is_finite() {
            self.start_angle = defaults.start_angle;
        }
        if !self.tilt.is_finite() {
            self.tilt = defaults.tilt;
        }
        if !self.radius_fraction.is_finite() || self.radius_fraction < 0.0 {
            self.radius_fraction = defaults.radius_fraction;
        }
        if !self.orb_size_near.is_finite() || self.orb_size_near < 0.0 {
            self.orb_size_near = defaults.orb_size_near;
        }
        if !self.orb_size_far.is_finite() || self.orb_size_far < 0.0 {
            self.orb_size_far = defaults.orb_size_far;
        }

        // Zero durations are allowed (instant transitions); negatives are not
        self.tween_ms = non_negative(self.tween_ms);
        self.trail_window_ms = non_negative(self.trail_window_ms);
        self.glow_window_ms = non_negative(self.glow_window_ms);

        // A zero interval would mean an infinitely fast pulse
        if !self.pulse_interval_ms.is_finite() || self.pulse_interval_ms < 1.0 {
            self.pulse_interval_ms = 1.0;
        }

        self.trail_samples = self.trail_samples.max(1);
        self
    }
}

fn non_negative(ms: f64) -> f64 {
    if ms.is_finite() { ms.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let config = SceneConfig::default();
        assert_eq!(config.tween_ms, 450.0);
        assert_eq!(config.pulse_interval_ms, 500.0);
        assert_eq!(config.trail_window_ms, 1500.0);
        assert_eq!(config.trail_samples, 80);
        assert_eq!(config.glow_window_ms, 300.0);
        assert_eq!(config.orb_size_near, 62.0);
        assert_eq!(config.orb_size_far, 28.0);
        assert!((config.radius_fraction - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SceneConfig::from_json(r#"{ "tilt": 0.0 }"#).unwrap();
        assert_eq!(config.tilt, 0.0);
        assert_eq!(config.tween_ms, TWEEN_MS);
        assert_eq!(config.trail_samples, TRAIL_SAMPLES);
    }

    #[test]
    fn test_sanitized_clamps_degenerate_values() {
        let config = SceneConfig {
            tween_ms: -10.0,
            pulse_interval_ms: 0.0,
            trail_samples: 0,
            radius_fraction: f32::NAN,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(config.tween_ms, 0.0);
        assert_eq!(config.pulse_interval_ms, 1.0);
        assert_eq!(config.trail_samples, 1);
        assert_eq!(config.radius_fraction, RADIUS_FRACTION);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(SceneConfig::from_json("{ tilt: ").is_err());
    }
}
