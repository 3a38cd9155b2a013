//! Confetti burst released on confirmation
//!
//! Pure data: the DOM layer turns each piece into an element and removes the
//! burst once it expires.

use glam::Vec2;
use serde::Serialize;

use super::rng::RandomSource;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfettiPiece {
    pub color: &'static str,
    /// Travel from the card center (px)
    pub travel: Vec2,
    pub rotation_deg: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfettiBurst {
    pub id: u32,
    pub pieces: Vec<ConfettiPiece>,
    pub expires_at: f64,
}

impl ConfettiBurst {
    /// Build a burst of `CONFETTI_COUNT` pieces with colors cycling through the palette
    pub fn release(id: u32, now: f64, rng: &mut dyn RandomSource) -> Self {
        let pieces = (0..CONFETTI_COUNT)
            .map(|i| {
                let tx = rng.range(CONFETTI_TX_MIN, CONFETTI_TX_MAX);
                let ty = rng.range(CONFETTI_TY_MIN, CONFETTI_TY_MAX);
                let rotation_deg = rng.range(CONFETTI_ROT_MIN, CONFETTI_ROT_MAX);
                ConfettiPiece {
                    color: CONFETTI_PALETTE[i % CONFETTI_PALETTE.len()],
                    travel: Vec2::new(tx, ty),
                    rotation_deg,
                }
            })
            .collect();

        Self {
            id,
            pieces,
            expires_at: now + CONFETTI_LIFETIME_MS,
        }
    }

    pub fn expired(&self, now: f64) -> bool {
        now >= self.expires_at
    }
}
