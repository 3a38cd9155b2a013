//! Widget state and output events
//!
//! Everything the widget knows lives in one owned struct. The DOM layer only
//! reads it and applies the queued events.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::confetti::ConfettiBurst;
use super::counter::{DodgeCounter, Toast};
use super::evasion::Flourish;
use super::limits::{Viewport, ViewportLimits};
use super::position::PositionController;
use super::timers::EffectSlot;

/// Confirmation flow phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the user; the evasive control dodges
    #[default]
    Active,
    /// The negative control was chosen
    Confirmed,
}

/// Effects for the presentation layer, drained after each input and frame
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    FlourishStarted(Flourish),
    FlourishCleared,
    DodgeCounted { count: u32, emphasis: u32 },
    ToastShown(&'static str),
    ToastHidden,
    /// Replace the status line (`None` clears it)
    Status(Option<&'static str>),
    Confirmed { show_retry: bool },
    Reset,
    ConfettiReleased(ConfettiBurst),
    ConfettiExpired(u32),
}

#[derive(Debug, Clone, Serialize)]
pub struct WidgetState {
    pub viewport: Viewport,
    pub position: PositionController,
    pub phase: Phase,
    /// Set on confirmation; gates all pointer-driven movement
    pub locked: bool,
    pub counter: DodgeCounter,
    pub toast: Toast,
    pub flourish: Option<Flourish>,
    pub flourish_reset: EffectSlot,
    pub control_visible: bool,
    pub retry_visible: bool,
    pub bursts: Vec<ConfettiBurst>,
    #[serde(skip)]
    pub events: Vec<WidgetEvent>,
    next_burst_id: u32,
}

impl WidgetState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            position: PositionController::default(),
            phase: Phase::Active,
            locked: false,
            counter: DodgeCounter::default(),
            toast: Toast::default(),
            flourish: None,
            flourish_reset: EffectSlot::default(),
            control_visible: true,
            retry_visible: false,
            bursts: Vec::new(),
            events: Vec::new(),
            next_burst_id: 1,
        }
    }

    /// Limits for the current viewport (derived on every call)
    pub fn limits(&self) -> ViewportLimits {
        self.viewport.limits()
    }

    /// Center of the evasive control at its current position
    pub fn control_center(&self) -> Vec2 {
        self.position.center(&self.limits())
    }

    pub fn next_burst_id(&mut self) -> u32 {
        let id = self.next_burst_id;
        self.next_burst_id += 1;
        id
    }

    pub fn emit(&mut self, event: WidgetEvent) {
        self.events.push(event);
    }
}
