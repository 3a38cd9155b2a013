//! Position controller for the evasive control
//!
//! Holds the rendered position and the target it eases toward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::limits::ViewportLimits;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionController {
    /// Current rendered top-left position
    pub pos: Vec2,
    /// Where `pos` eases toward; always inside the limits it was clamped to
    pub target: Vec2,
}

impl Default for PositionController {
    fn default() -> Self {
        let start = Vec2::splat(INITIAL_POS);
        Self {
            pos: start,
            target: start,
        }
    }
}

impl PositionController {
    /// Clamp and store a new target. `immediate` also moves the position.
    pub fn set_target(&mut self, point: Vec2, limits: &ViewportLimits, immediate: bool) -> Vec2 {
        self.target = limits.clamp(point);
        if immediate {
            self.pos = self.target;
        }
        self.target
    }

    /// Advance one animation frame. Returns the new position.
    pub fn tick(&mut self) -> Vec2 {
        self.pos += (self.target - self.pos) * EASE_FACTOR;

        if (self.target.x - self.pos.x).abs() < SNAP_EPSILON {
            self.pos.x = self.target.x;
        }
        if (self.target.y - self.pos.y).abs() < SNAP_EPSILON {
            self.pos.y = self.target.y;
        }

        self.pos
    }

    /// Whether the position has reached the target on both axes
    pub fn settled(&self) -> bool {
        self.pos == self.target
    }

    /// Center of the control for the given control size
    pub fn center(&self, limits: &ViewportLimits) -> Vec2 {
        crate::box_center(self.pos, limits.control_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::limits::Viewport;
    use proptest::prelude::*;

    fn limits() -> ViewportLimits {
        Viewport::new(824.0, 556.0, 12.0, 44.0).limits()
    }

    #[test]
    fn test_set_target_clamps() {
        let mut ctl = PositionController::default();
        assert_eq!(ctl.target, Vec2::new(24.0, 24.0));

        ctl.set_target(Vec2::new(-50.0, -50.0), &limits(), false);
        assert_eq!(ctl.target, Vec2::new(12.0, 12.0));
        // Eased: position untouched until the next tick
        assert_eq!(ctl.pos, Vec2::new(24.0, 24.0));

        ctl.set_target(Vec2::new(5000.0, 5000.0), &limits(), false);
        assert_eq!(ctl.target, Vec2::new(800.0, 500.0));
    }

    #[test]
    fn test_set_target_immediate() {
        let mut ctl = PositionController::default();
        ctl.set_target(Vec2::new(300.0, 200.0), &limits(), true);
        assert_eq!(ctl.pos, Vec2::new(300.0, 200.0));
        assert!(ctl.settled());
    }

    #[test]
    fn test_tick_eases_eighteen_percent() {
        let mut ctl = PositionController::default();
        ctl.set_target(Vec2::new(124.0, 24.0), &limits(), false);
        let pos = ctl.tick();
        assert!((pos.x - 42.0).abs() < 1e-4);
        assert_eq!(pos.y, 24.0);
    }

    #[test]
    fn test_tick_snaps_near_target() {
        let mut ctl = PositionController::default();
        ctl.target = Vec2::new(24.2, 24.0);
        ctl.tick();
        assert_eq!(ctl.pos.x, 24.2);
    }

    #[test]
    fn test_tick_converges() {
        let mut ctl = PositionController::default();
        ctl.set_target(Vec2::new(800.0, 500.0), &limits(), false);
        for _ in 0..200 {
            ctl.tick();
        }
        assert!(ctl.settled());
    }

    proptest! {
        #[test]
        fn target_always_within_limits(x in -1.0e5f32..1.0e5, y in -1.0e5f32..1.0e5) {
            let limits = limits();
            let mut ctl = PositionController::default();
            let target = ctl.set_target(Vec2::new(x, y), &limits, false);
            prop_assert!(limits.contains(target));
        }

        #[test]
        fn tick_never_overshoots(tx in 12.0f32..800.0, ty in 12.0f32..500.0) {
            let mut ctl = PositionController::default();
            ctl.set_target(Vec2::new(tx, ty), &limits(), false);
            let before = (ctl.target - ctl.pos).length();
            ctl.tick();
            let after = (ctl.target - ctl.pos).length();
            prop_assert!(after <= before);
        }
    }
}
