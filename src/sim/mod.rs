//! Deterministic widget core
//!
//! All interaction logic lives here. This module must stay pure:
//! - Time comes in as explicit millisecond timestamps
//! - Randomness only through `RandomSource`
//! - No DOM or platform dependencies

pub mod confetti;
pub mod counter;
pub mod evasion;
pub mod limits;
pub mod position;
pub mod rng;
pub mod state;
pub mod timers;
pub mod widget;

pub use confetti::{ConfettiBurst, ConfettiPiece};
pub use counter::{DodgeCounter, Toast};
pub use evasion::{Flourish, dodge_destination, farthest_spot, teleport_candidates};
pub use limits::{Viewport, ViewportLimits};
pub use position::PositionController;
pub use rng::{RandomSource, RngState, SequenceRng};
pub use state::{Phase, WidgetEvent, WidgetState};
pub use timers::EffectSlot;
pub use widget::Widget;
