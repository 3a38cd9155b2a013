//! Viewport geometry
//!
//! The evasive control is positioned by its top-left corner. Its legal area
//! is the window minus the control's own size, inset by a fixed padding.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::consts::VIEWPORT_PADDING;

/// Last measured window and control sizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub control_width: f32,
    pub control_height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            control_width: 96.0,
            control_height: 44.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32, control_width: f32, control_height: f32) -> Self {
        Self {
            width,
            height,
            control_width,
            control_height,
        }
    }

    /// Derive the clamping box for the control's top-left corner
    pub fn limits(&self) -> ViewportLimits {
        let min_x = VIEWPORT_PADDING;
        let min_y = VIEWPORT_PADDING;
        ViewportLimits {
            min_x,
            min_y,
            // Too-small windows collapse the range onto the padding corner
            max_x: (self.width - self.control_width - VIEWPORT_PADDING).max(min_x),
            max_y: (self.height - self.control_height - VIEWPORT_PADDING).max(min_y),
            control_width: self.control_width,
            control_height: self.control_height,
        }
    }
}

/// Bounds for the control's top-left corner. Recomputed on every use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportLimits {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
    pub control_width: f32,
    pub control_height: f32,
}

impl ViewportLimits {
    /// Clamp a point into the limits
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y.clamp(self.min_y, self.max_y),
        )
    }

    pub fn contains(&self, p: Vec2) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }

    pub fn control_size(&self) -> Vec2 {
        Vec2::new(self.control_width, self.control_height)
    }

    /// The four corners in scan order: top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.min_x, self.min_y),
            Vec2::new(self.max_x, self.min_y),
            Vec2::new(self.min_x, self.max_y),
            Vec2::new(self.max_x, self.max_y),
        ]
    }

    /// Uniform random point inside the limits (x drawn first)
    pub fn random_point(&self, rng: &mut dyn RandomSource) -> Vec2 {
        let x = rng.range(self.min_x, self.max_x);
        let y = rng.range(self.min_y, self.max_y);
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::SequenceRng;

    /// 824x556 window with a 12x44 control gives {12, 12, 800, 500}
    fn sample_viewport() -> Viewport {
        Viewport::new(824.0, 556.0, 12.0, 44.0)
    }

    #[test]
    fn test_limits_from_viewport() {
        let limits = sample_viewport().limits();
        assert_eq!(limits.min_x, 12.0);
        assert_eq!(limits.min_y, 12.0);
        assert_eq!(limits.max_x, 800.0);
        assert_eq!(limits.max_y, 500.0);
    }

    #[test]
    fn test_clamp_to_limits() {
        let limits = sample_viewport().limits();
        assert_eq!(limits.clamp(Vec2::new(-50.0, -50.0)), Vec2::new(12.0, 12.0));
        assert_eq!(limits.clamp(Vec2::new(5000.0, 5000.0)), Vec2::new(800.0, 500.0));
        assert_eq!(limits.clamp(Vec2::new(300.0, 200.0)), Vec2::new(300.0, 200.0));
    }

    #[test]
    fn test_tiny_viewport_collapses() {
        let limits = Viewport::new(50.0, 30.0, 96.0, 44.0).limits();
        assert_eq!(limits.max_x, limits.min_x);
        assert_eq!(limits.max_y, limits.min_y);
        assert_eq!(limits.clamp(Vec2::new(400.0, -3.0)), Vec2::new(12.0, 12.0));
    }

    #[test]
    fn test_random_point_draw_order() {
        let limits = sample_viewport().limits();
        let mut rng = SequenceRng::new([0.5, 0.0]);
        let p = limits.random_point(&mut rng);
        assert_eq!(p, Vec2::new(406.0, 12.0));
        assert!(limits.contains(p));
    }
}
