//! Trail and color shaping for the pulse and orbs

use glam::Vec2;

use super::TrailSegment;

/// Base orb fill (RGB)
pub const ORB_BASE_COLOR: [f32; 3] = [200.0, 100.0, 100.0];
/// Fill at full glow (RGB)
pub const ORB_GLOW_COLOR: [f32; 3] = [255.0, 214.0, 150.0];

/// Blend the orb fill toward the highlight by `glow`
pub fn orb_color(glow: f32) -> [u8; 3] {
    let g = glow.clamp(0.0, 1.0);
    let mut rgb = [0u8; 3];
    for (out, (base, hot)) in rgb
        .iter_mut()
        .zip(ORB_BASE_COLOR.iter().zip(ORB_GLOW_COLOR.iter()))
    {
        *out = (base + (hot - base) * g).round() as u8;
    }
    rgb
}

/// Connect trail points (oldest first) into segments that fade in toward the head
pub fn trail_segments(points: &[Vec2]) -> Vec<TrailSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let n = (points.len() - 1) as f32;
    points
        .windows(2)
        .enumerate()
        .map(|(i, pair)| TrailSegment {
            from: pair[0],
            to: pair[1],
            alpha: (i + 1) as f32 / n,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orb_color_endpoints() {
        assert_eq!(orb_color(0.0), [200, 100, 100]);
        assert_eq!(orb_color(1.0), [255, 214, 150]);
        assert_eq!(orb_color(4.0), orb_color(1.0));
    }

    #[test]
    fn test_trail_alpha_increases_to_head() {
        let points: Vec<Vec2> = (0..5).map(|i| Vec2::new(i as f32, 0.0)).collect();
        let segs = trail_segments(&points);
        assert_eq!(segs.len(), 4);
        assert!(segs.windows(2).all(|w| w[0].alpha < w[1].alpha));
        assert_eq!(segs[3].alpha, 1.0);
        assert_eq!(segs[3].to, Vec2::new(4.0, 0.0));
    }

    #[test]
    fn test_trail_needs_two_points() {
        assert!(trail_segments(&[]).is_empty());
        assert!(trail_segments(&[Vec2::ZERO]).is_empty());
    }
}
