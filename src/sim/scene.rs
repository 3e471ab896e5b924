//! Scene controller
//!
//! Owns the orbs and everything that moves them. Events are applied between
//! frames; `frame` advances the tween and pulse and emits draw commands.

use glam::Vec2;

use super::event::{EventQueue, EventSender, SceneEvent};
use super::layout::layout_angles_from;
use super::orb::{Orb, OrbSet, Resize, Tween};
use super::projector::Projector;
use super::pulse::{Pulse, glow_intensity};
use crate::consts::{CURSOR_MARK_SIZE, GLOW_SIZE_BOOST, HEAD_SIZE};
use crate::net::CursorMessage;
use crate::renderer::{CursorMark, Frame, HeadMarker, OrbSprite, RingGuide, trail_segments};
use crate::settings::SceneConfig;

pub struct Scene {
    config: SceneConfig,
    projector: Projector,
    orbs: OrbSet,
    count: usize,
    tween: Tween,
    pulse: Pulse,
    viewport: Vec2,
    events: EventQueue,
    cursors: Vec<CursorMark>,
}

impl Scene {
    pub fn new(config: SceneConfig, width: f32, height: f32) -> Self {
        let config = config.sanitized();
        let projector = Projector::new(config.tilt)
            .with_sizes(config.orb_size_near, config.orb_size_far);

        let mut scene = Self {
            projector,
            orbs: OrbSet::new(),
            count: 0,
            tween: Tween::new(config.tween_ms),
            pulse: Pulse::new(config.pulse_interval_ms),
            viewport: Vec2::ZERO,
            events: EventQueue::new(),
            cursors: Vec::new(),
            config,
        };
        scene.pulse.reset(0.0, scene.config.start_angle);
        scene.resize(width, height);
        scene
    }

    /// Handle for transport callbacks to queue events
    pub fn sender(&self) -> EventSender {
        self.events.sender()
    }

    /// Track the viewport; the ring radius follows its width
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(0.0), height.max(0.0));
        self.projector
            .set_radius(self.viewport.x * self.config.radius_fraction);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn orbs(&self) -> &OrbSet {
        &self.orbs
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn tween(&self) -> &Tween {
        &self.tween
    }

    pub fn pulse(&self) -> &Pulse {
        &self.pulse
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn center(&self) -> Vec2 {
        self.viewport * 0.5
    }

    /// Apply one inbound event
    pub fn apply(&mut self, event: SceneEvent, now_ms: f64) {
        match event {
            SceneEvent::Count { count } => {
                // Negative counts are transient garbage; treat as empty
                let count = usize::try_from(count).unwrap_or(0);
                self.set_count(count, now_ms);
            }
            SceneEvent::Cursor { x, y } => self.push_cursor(x, y),
            SceneEvent::Connected { id } => match id {
                Some(id) => log::info!("Connected to relay with ID: {}", id),
                None => log::info!("Connected to relay"),
            },
            SceneEvent::Disconnected => log::info!("Disconnected from relay"),
        }
    }

    /// Apply everything queued through [`Scene::sender`]
    pub fn drain_events(&mut self, now_ms: f64) {
        for event in self.events.drain() {
            self.apply(event, now_ms);
        }
    }

    /// Local drag: draw the mark here and hand back the broadcast message
    pub fn local_cursor(&mut self, x: f32, y: f32) -> CursorMessage {
        self.push_cursor(x, y);
        CursorMessage { x, y }
    }

    fn push_cursor(&mut self, x: f32, y: f32) {
        self.cursors.push(CursorMark {
            pos: Vec2::new(x, y),
            size: CURSOR_MARK_SIZE,
        });
    }

    /// Reconcile the ring against a new participant count
    ///
    /// Returns `None` when the count is unchanged.
    pub fn set_count(&mut self, count: usize, now_ms: f64) -> Option<Resize> {
        if count == self.count {
            return None;
        }

        let old = self.count;
        self.count = count;
        log::debug!("participant count {} -> {}", old, count);

        let start = self.config.start_angle;
        let targets = layout_angles_from(count, start);
        let old_layout = layout_angles_from(old, start);

        // New orbs peel off the last existing slot; a lone first orb starts home
        let resize = self.orbs.resize(count, |i| {
            let angle = match old {
                0 => targets[i],
                _ => old_layout[i.min(old - 1)],
            };
            Orb::new(angle)
        });

        for (orb, &target) in self.orbs.iter_mut().zip(&targets) {
            orb.retarget(target);
        }
        self.tween.start(now_ms);
        self.pulse.reset(now_ms, start);

        Some(resize)
    }

    /// Advance to `now_ms` and build the draw list
    pub fn frame(&mut self, now_ms: f64) -> Frame {
        self.drain_events(now_ms);

        self.tween.step(&mut self.orbs, now_ms);

        let orbs = &mut self.orbs;
        self.pulse.update(now_ms, self.count, |i| {
            orbs.activate(i, now_ms);
        });

        let center = self.center();

        let mut sprites: Vec<OrbSprite> = self
            .orbs
            .iter()
            .enumerate()
            .map(|(index, orb)| {
                let p = self.projector.project(orb.angle);
                let glow = glow_intensity(orb.activated_at, now_ms, self.config.glow_window_ms);
                OrbSprite {
                    index,
                    pos: center + p.pos,
                    size: p.size * (1.0 + GLOW_SIZE_BOOST * glow),
                    depth: p.depth,
                    glow,
                }
            })
            .collect();
        // Far first so nearer orbs paint over them
        sprites.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        let trail_points: Vec<Vec2> = self
            .pulse
            .trail_angles(
                now_ms,
                self.count,
                self.config.trail_window_ms,
                self.config.trail_samples,
            )
            .into_iter()
            .map(|a| center + self.projector.project(a).pos)
            .collect();

        let head = (self.count > 0).then(|| HeadMarker {
            pos: center + self.projector.project(self.pulse.angle(now_ms, self.count)).pos,
            size: HEAD_SIZE,
        });

        Frame {
            viewport: self.viewport,
            ring: Some(RingGuide {
                center,
                radius_x: self.projector.radius(),
                radius_y: self.projector.ellipse_height() / 2.0,
            }),
            orbs: sprites,
            trail: trail_segments(&trail_points),
            head,
            cursors: std::mem::take(&mut self.cursors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::START_ANGLE;
    use crate::sim::layout::layout_angles;

    fn scene() -> Scene {
        Scene::new(SceneConfig::default(), 1000.0, 800.0)
    }

    #[test]
    fn test_radius_follows_width() {
        let mut s = scene();
        assert!((s.projector().radius() - 400.0).abs() < 1e-3);
        s.resize(0.0, 0.0);
        assert_eq!(s.projector().radius(), 1.0);
    }

    #[test]
    fn test_first_orb_starts_on_its_slot() {
        let mut s = scene();
        let resize = s.set_count(1, 0.0).unwrap();
        assert_eq!(resize.created, 0..1);
        let orb = s.orbs().get(0).unwrap();
        assert_eq!(orb.angle, START_ANGLE);
        assert_eq!(orb.target_angle, START_ANGLE);
    }

    #[test]
    fn test_growth_peels_off_last_slot() {
        let mut s = scene();
        s.set_count(3, 0.0);
        s.frame(1000.0);
        let before: Vec<f32> = s.orbs().iter().map(|o| o.angle).collect();

        let resize = s.set_count(5, 2000.0).unwrap();
        assert_eq!(resize.created, 3..5);
        assert_eq!(s.orbs().len(), 5);

        let old_last = layout_angles(3)[2];
        for (i, orb) in s.orbs().iter().enumerate() {
            assert!(orb.angle.is_finite());
            if i < 3 {
                assert_eq!(orb.angle, before[i]);
            } else {
                assert_eq!(orb.angle, old_last);
            }
        }

        let targets = layout_angles(5);
        for (orb, t) in s.orbs().iter().zip(&targets) {
            assert_eq!(orb.target_angle, *t);
        }
        assert!(s.tween().active);
    }

    #[test]
    fn test_shrink_truncates() {
        let mut s = scene();
        s.set_count(5, 0.0);
        let resize = s.set_count(2, 100.0).unwrap();
        assert_eq!(resize.destroyed, 2..5);
        assert_eq!(s.orbs().len(), 2);
        assert_eq!(s.count(), 2);
    }

    #[test]
    fn test_repeated_count_is_noop() {
        let mut s = scene();
        s.set_count(4, 0.0);
        let orbs = s.orbs().clone();
        let started = s.tween().start_ms;

        assert!(s.set_count(4, 300.0).is_none());
        assert_eq!(s.tween().start_ms, started);
        assert_eq!(s.orbs().len(), orbs.len());
        for (a, b) in s.orbs().iter().zip(orbs.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_negative_count_clamps_to_empty() {
        let mut s = scene();
        s.apply(SceneEvent::Count { count: 3 }, 0.0);
        s.apply(SceneEvent::Count { count: -2 }, 10.0);
        assert_eq!(s.count(), 0);
        assert!(s.orbs().is_empty());
        let frame = s.frame(20.0);
        assert!(frame.orbs.is_empty());
        assert!(frame.trail.is_empty());
        assert!(frame.head.is_none());
    }

    #[test]
    fn test_tween_completes_on_layout() {
        let mut s = scene();
        s.set_count(2, 0.0);
        s.set_count(3, 100.0);
        s.frame(100.0 + 450.0);
        assert!(!s.tween().active);
        for (orb, t) in s.orbs().iter().zip(layout_angles(3)) {
            assert_eq!(orb.angle, t);
        }
    }

    #[test]
    fn test_frame_orbs_sorted_far_to_near() {
        let mut s = scene();
        s.set_count(7, 0.0);
        let frame = s.frame(1000.0);
        assert_eq!(frame.orbs.len(), 7);
        assert!(frame.orbs.windows(2).all(|w| w[0].depth <= w[1].depth));
    }

    #[test]
    fn test_queued_events_applied_at_frame() {
        let mut s = scene();
        let tx = s.sender();
        tx.send(SceneEvent::Count { count: 3 });
        tx.send(SceneEvent::Cursor { x: 5.0, y: 6.0 });
        assert_eq!(s.count(), 0);

        let frame = s.frame(0.0);
        assert_eq!(s.count(), 3);
        assert_eq!(frame.cursors.len(), 1);
        assert_eq!(frame.cursors[0].pos, Vec2::new(5.0, 6.0));

        // Cursor marks last a single frame
        assert!(s.frame(16.0).cursors.is_empty());
    }

    #[test]
    fn test_pulse_hit_glows_orb() {
        let mut s = scene();
        s.set_count(4, 0.0);
        let frame = s.frame(0.0);
        let first = frame.orbs.iter().find(|o| o.index == 0).unwrap();
        assert_eq!(first.glow, 1.0);
        assert_eq!(s.orbs().get(0).unwrap().activated_at, Some(0.0));

        // Slot 1 is reached one interval later
        let frame = s.frame(500.0);
        let second = frame.orbs.iter().find(|o| o.index == 1).unwrap();
        assert_eq!(second.glow, 1.0);
        let first = frame.orbs.iter().find(|o| o.index == 0).unwrap();
        assert_eq!(first.glow, 0.0);
    }

    #[test]
    fn test_local_cursor_echoes_and_returns_message() {
        let mut s = scene();
        let msg = s.local_cursor(10.0, 20.0);
        assert_eq!(msg, CursorMessage { x: 10.0, y: 20.0 });
        assert_eq!(s.frame(0.0).cursors.len(), 1);
    }

    #[test]
    fn test_ring_guide_matches_projector() {
        let mut s = scene();
        let frame = s.frame(0.0);
        let ring = frame.ring.unwrap();
        assert_eq!(ring.center, Vec2::new(500.0, 400.0));
        assert!((ring.radius_x - 400.0).abs() < 1e-3);
        assert!((ring.radius_y * 2.0 - s.projector().ellipse_height()).abs() < 1e-3);
    }
}
