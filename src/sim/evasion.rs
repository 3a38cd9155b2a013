//! Evasion geometry
//!
//! Where the evasive control goes next. Two moves exist:
//! - a smooth dodge, pushing the control away along the pointer→center line
//! - a teleport to whichever corner (or random spot) is farthest from a press

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::limits::ViewportLimits;
use super::rng::RandomSource;
use crate::consts::*;

/// Transient scale/rotate applied to the control while it dodges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flourish {
    pub scale: f32,
    pub rotate_deg: f32,
}

impl Flourish {
    /// Random flourish (scale drawn before rotation)
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        let scale = rng.range(FLOURISH_SCALE_MIN, FLOURISH_SCALE_MAX);
        let rotate_deg = rng.range(FLOURISH_ROTATE_MIN, FLOURISH_ROTATE_MAX);
        Self { scale, rotate_deg }
    }

    /// CSS `transform` value
    pub fn transform(&self) -> String {
        format!("scale({}) rotate({}deg)", self.scale, self.rotate_deg)
    }
}

/// Unclamped dodge destination for a control at `pos` with center `center`
///
/// The push is `DODGE_PUSH_BASE` plus a random extra, applied from the
/// current position along the unit vector from the pointer to the center.
/// A pointer exactly on the center yields no push.
pub fn dodge_destination(pos: Vec2, center: Vec2, pointer: Vec2, rng: &mut dyn RandomSource) -> Vec2 {
    let away = center - pointer;
    let mut distance = away.length();
    if distance == 0.0 || !distance.is_finite() {
        distance = 1.0;
    }

    let push = DODGE_PUSH_BASE + rng.range(DODGE_PUSH_EXTRA_MIN, DODGE_PUSH_EXTRA_MAX);
    pos + away / distance * push
}

/// Candidate spots for a press teleport: four corners then one random point
pub fn teleport_candidates(limits: &ViewportLimits, rng: &mut dyn RandomSource) -> [Vec2; 5] {
    let [a, b, c, d] = limits.corners();
    [a, b, c, d, limits.random_point(rng)]
}

/// The candidate farthest from `pointer`. Ties keep the earliest candidate.
pub fn farthest_spot(candidates: &[Vec2], pointer: Vec2) -> Option<Vec2> {
    let mut best = None;
    let mut best_distance = -1.0;

    for &spot in candidates {
        let d = spot.distance(pointer);
        if d > best_distance {
            best_distance = d;
            best = Some(spot);
        }
    }

    best
}
