//! One-shot effect deadlines
//!
//! Each effect category owns a single slot. Scheduling again replaces the
//! pending deadline, so overlapping triggers never fire a stale reset.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectSlot {
    deadline: Option<f64>,
}

impl EffectSlot {
    /// Arm the slot to fire `delay_ms` after `now`, replacing any pending deadline
    pub fn schedule(&mut self, now: f64, delay_ms: f64) {
        self.deadline = Some(now + delay_ms);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// Returns true once when the deadline has passed, disarming the slot
    pub fn fire(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_deadline() {
        let mut slot = EffectSlot::default();
        slot.schedule(1000.0, 170.0);
        assert!(!slot.fire(1169.0));
        assert!(slot.fire(1170.0));
        assert!(!slot.fire(1300.0));
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_reschedule_replaces_pending() {
        let mut slot = EffectSlot::default();
        slot.schedule(0.0, 650.0);
        slot.schedule(500.0, 650.0);
        // The first deadline is gone
        assert!(!slot.fire(700.0));
        assert!(slot.fire(1150.0));
    }

    #[test]
    fn test_cancel() {
        let mut slot = EffectSlot::default();
        slot.schedule(0.0, 10.0);
        slot.cancel();
        assert!(!slot.fire(100.0));
        assert_eq!(slot.deadline(), None);
    }
}
