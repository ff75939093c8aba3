//! Mapping from the physics frame to screen pixels.
//!
//! Screens put the origin at the top-left corner with `y` growing downward.
//! A `ScreenFrame` places the pivot at a fixed pixel and scales metres to
//! pixels; it is a read-only view and never alters the physics coordinates.

use swing_dynamics::BobPositions;
use swing_model::{Result, Vec2};
use swing_model::params::require_positive;

/// Pivot pixel plus a metres-to-pixels scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenFrame {
    /// Pixel position of the pivot.
    pub origin: Vec2,
    /// Pixels per physics length unit.
    pub scale: f64,
}

impl ScreenFrame {
    /// Frame with the pivot at `origin`; `scale` must be finite and > 0.
    pub fn new(origin: Vec2, scale: f64) -> Result<Self> {
        require_positive("scale", scale)?;
        Ok(Self { origin, scale })
    }

    /// Pivot centred horizontally a quarter of the way down, with the fully
    /// extended pendulum (`reach`) spanning half the window height.
    pub fn fit(width: f64, height: f64, reach: f64) -> Result<Self> {
        require_positive("reach", reach)?;
        Self::new(Vec2::new(width / 2.0, height / 4.0), height / (2.0 * reach))
    }

    /// Physics point to pixel, flipping `y`.
    pub fn to_screen(&self, point: &Vec2) -> Vec2 {
        Vec2::new(
            self.origin.x + self.scale * point.x,
            self.origin.y - self.scale * point.y,
        )
    }

    /// Pixel back to the physics frame.
    pub fn from_screen(&self, pixel: &Vec2) -> Vec2 {
        Vec2::new(
            (pixel.x - self.origin.x) / self.scale,
            (self.origin.y - pixel.y) / self.scale,
        )
    }

    /// Pivot, bob 1 and bob 2 in pixels, ready to draw as a polyline.
    pub fn polyline(&self, positions: &BobPositions) -> [Vec2; 3] {
        [
            self.origin,
            self.to_screen(&positions.bob1),
            self.to_screen(&positions.bob2),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use swing_dynamics::to_cartesian;

    #[test]
    fn test_hanging_pendulum_points_down_on_screen() {
        let frame = ScreenFrame::fit(800.0, 600.0, 2.0).unwrap();
        assert_eq!(frame.origin, Vec2::new(400.0, 150.0));

        let [pivot, bob1, bob2] = frame.polyline(&to_cartesian(0.0, 0.0, 1.0, 1.0));
        assert_eq!(pivot, frame.origin);
        assert_relative_eq!(bob1, Vec2::new(400.0, 300.0));
        assert_relative_eq!(bob2, Vec2::new(400.0, 450.0));
    }

    #[test]
    fn test_screen_roundtrip() {
        let frame = ScreenFrame::new(Vec2::new(320.0, 120.0), 200.0).unwrap();
        let p = Vec2::new(0.3, -1.7);
        assert_relative_eq!(frame.from_screen(&frame.to_screen(&p)), p, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_scale_rejected() {
        let origin = Vec2::new(10.0, 10.0);
        assert!(ScreenFrame::new(origin, 0.0).is_err());
        assert!(ScreenFrame::new(origin, -3.0).is_err());
        assert!(ScreenFrame::new(origin, f64::NAN).is_err());
        assert!(ScreenFrame::fit(800.0, 600.0, 0.0).is_err());
        assert!(ScreenFrame::fit(800.0, 0.0, 2.0).is_err());
        assert!(ScreenFrame::fit(800.0, 600.0, f64::INFINITY).is_err());
    }
}
