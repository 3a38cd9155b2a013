//! Dodge counter and toast
//!
//! Counting is throttled so a single sweep of the pointer that triggers a
//! burst of dodges only counts once.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::timers::EffectSlot;
use crate::consts::*;
use crate::messages::TOASTS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DodgeCounter {
    pub count: u32,
    /// Timestamp (ms) of the last accepted dodge
    pub last_accepted: Option<f64>,
}

impl DodgeCounter {
    /// Count a dodge at `now`. Returns false if throttled.
    pub fn register(&mut self, now: f64) -> bool {
        if let Some(last) = self.last_accepted {
            if now - last < DODGE_THROTTLE_MS {
                return false;
            }
        }
        self.count = self.count.saturating_add(1);
        self.last_accepted = Some(now);
        true
    }

    /// Glow level for the negative control, saturating at `EMPHASIS_CAP`
    pub fn emphasis(&self) -> u32 {
        self.count.min(EMPHASIS_CAP)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Transient notification shown on each counted dodge
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    /// Index into the toast message table while visible
    pub message: Option<usize>,
    pub hide: EffectSlot,
}

impl Toast {
    /// Pick a message and (re)start the hide timer
    pub fn show(&mut self, now: f64, rng: &mut dyn RandomSource) -> &'static str {
        let index = rng.index(TOASTS.len());
        self.message = Some(index);
        self.hide.schedule(now, TOAST_MS);
        TOASTS[index]
    }

    /// Hide if the timer has expired. Returns true when it just hid.
    pub fn expire(&mut self, now: f64) -> bool {
        if self.hide.fire(now) {
            self.message = None;
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.hide.cancel();
    }

    pub fn text(&self) -> Option<&'static str> {
        self.message.and_then(|i| TOASTS.get(i).copied())
    }
}
