//! Evasive Confirm - a Yes/No card whose Yes button runs away
//!
//! Core modules:
//! - `sim`: Deterministic widget core (positions, evasion, counter, confetti)
//! - `platform`: Browser DOM bindings (wasm32 only)
//! - `settings`: Variant selection and feature toggles

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{Settings, Variant};

use glam::Vec2;

/// Widget tuning constants
pub mod consts {
    /// Initial top-left position of the evasive control (px)
    pub const INITIAL_POS: f32 = 24.0;
    /// Gap kept between the evasive control and the viewport edges (px)
    pub const VIEWPORT_PADDING: f32 = 12.0;

    /// Fraction of the remaining distance covered per animation frame
    pub const EASE_FACTOR: f32 = 0.18;
    /// Per-axis distance below which the position snaps onto the target
    pub const SNAP_EPSILON: f32 = 0.2;

    /// Pointer distance (to the control center) that triggers a dodge
    pub const DODGE_RADIUS: f32 = 180.0;
    /// Base push applied on every dodge
    pub const DODGE_PUSH_BASE: f32 = 180.0;
    /// Random extra push range [min, max)
    pub const DODGE_PUSH_EXTRA_MIN: f32 = 70.0;
    pub const DODGE_PUSH_EXTRA_MAX: f32 = 140.0;
    /// Pointer-press distance that triggers a farthest-corner teleport
    pub const PRESS_RADIUS: f32 = 220.0;

    /// Dodge flourish ranges and lifetime
    pub const FLOURISH_SCALE_MIN: f32 = 0.97;
    pub const FLOURISH_SCALE_MAX: f32 = 1.04;
    pub const FLOURISH_ROTATE_MIN: f32 = -5.0;
    pub const FLOURISH_ROTATE_MAX: f32 = 5.0;
    pub const FLOURISH_FILTER: &str = "brightness(1.03) saturate(1.12)";
    pub const FLOURISH_MS: f64 = 170.0;

    /// Minimum interval between counted dodges (ms)
    pub const DODGE_THROTTLE_MS: f64 = 180.0;
    /// Dodge count at which the negative control's glow saturates
    pub const EMPHASIS_CAP: u32 = 24;
    /// Toast visibility (ms)
    pub const TOAST_MS: f64 = 650.0;

    /// Confetti burst parameters
    pub const CONFETTI_COUNT: usize = 30;
    pub const CONFETTI_LIFETIME_MS: f64 = 900.0;
    pub const CONFETTI_PALETTE: [&str; 5] = ["#ff7b72", "#ffd166", "#06d6a0", "#4cc9f0", "#f15bb5"];
    pub const CONFETTI_TX_MIN: f32 = -180.0;
    pub const CONFETTI_TX_MAX: f32 = 180.0;
    pub const CONFETTI_TY_MIN: f32 = -170.0;
    pub const CONFETTI_TY_MAX: f32 = 160.0;
    pub const CONFETTI_ROT_MIN: f32 = 120.0;
    pub const CONFETTI_ROT_MAX: f32 = 680.0;
}

/// User-facing strings
pub mod messages {
    /// Status shown when the pointer presses near the evasive control
    pub const UNCLICKABLE: &str = "The Yes button can never be clicked.";
    /// Status shown after the negative control is chosen
    pub const CONFIRMED: &str = "Done: you picked No.";
    /// Toast messages for counted dodges
    pub const TOASTS: [&str; 3] = ["Nope, too slow!", "Missed again!", "Just click No."];
}

/// Center of a box given its top-left corner and size
#[inline]
pub fn box_center(top_left: Vec2, size: Vec2) -> Vec2 {
    top_left + size / 2.0
}
