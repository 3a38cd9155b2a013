//! Widget controller
//!
//! Turns pointer and button input into state changes, and advances the
//! animation once per frame. Every effect for the page is queued on the
//! state as a [`WidgetEvent`].

use glam::Vec2;
use rand_pcg::Pcg32;

use super::confetti::ConfettiBurst;
use super::evasion::{Flourish, dodge_destination, farthest_spot, teleport_candidates};
use super::limits::Viewport;
use super::rng::{RandomSource, RngState};
use super::state::{Phase, WidgetEvent, WidgetState};
use crate::Settings;
use crate::consts::*;
use crate::messages;

pub struct Widget<R: RandomSource = Pcg32> {
    pub state: WidgetState,
    pub settings: Settings,
    rng: R,
}

impl Widget<Pcg32> {
    /// Widget driven by a seeded PCG generator
    pub fn seeded(settings: Settings, viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(settings, viewport, RngState::new(seed).to_rng())
    }
}

impl<R: RandomSource> Widget<R> {
    pub fn with_rng(settings: Settings, viewport: Viewport, rng: R) -> Self {
        Self {
            state: WidgetState::new(viewport),
            settings,
            rng,
        }
    }

    /// Initial placement: jump the target somewhere random and ease there
    pub fn start(&mut self) {
        self.teleport();
    }

    // === Position ===

    /// Clamp and store a new target; `immediate` also moves the control
    pub fn set_target(&mut self, point: Vec2, immediate: bool) -> Vec2 {
        let limits = self.state.limits();
        self.state.position.set_target(point, &limits, immediate)
    }

    /// Window or control size changed: re-clamp and pin in place
    pub fn resize(&mut self, viewport: Viewport) {
        self.state.viewport = viewport;
        let pos = self.state.position.pos;
        self.set_target(pos, true);
    }

    /// One animation frame: ease toward the target and expire timed effects.
    /// Returns the position to render.
    pub fn frame(&mut self, now: f64) -> Vec2 {
        let pos = self.state.position.tick();

        if self.state.flourish_reset.fire(now) {
            self.state.flourish = None;
            self.state.emit(WidgetEvent::FlourishCleared);
        }

        if self.state.toast.expire(now) {
            self.state.emit(WidgetEvent::ToastHidden);
        }

        let (expired, live): (Vec<_>, Vec<_>) = std::mem::take(&mut self.state.bursts)
            .into_iter()
            .partition(|b| b.expired(now));
        self.state.bursts = live;
        for burst in expired {
            self.state.emit(WidgetEvent::ConfettiExpired(burst.id));
        }

        pos
    }

    // === Evasion ===

    /// Pointer moved. Dodges when it comes within `DODGE_RADIUS` of the control.
    pub fn pointer_move(&mut self, pointer: Vec2, now: f64) {
        if self.state.locked {
            return;
        }
        if pointer.distance(self.state.control_center()) < DODGE_RADIUS {
            self.dodge(pointer, now);
        }
    }

    /// Pointer pressed. Teleports away when pressed within `PRESS_RADIUS`.
    pub fn pointer_down(&mut self, pointer: Vec2, now: f64) {
        if self.state.locked {
            return;
        }
        if pointer.distance(self.state.control_center()) < PRESS_RADIUS {
            self.teleport_to_farthest_corner(pointer, now);
            self.state.emit(WidgetEvent::Status(Some(messages::UNCLICKABLE)));
        }
    }

    /// Push the control away from the pointer with a short flourish
    pub fn dodge(&mut self, pointer: Vec2, now: f64) {
        if self.state.locked {
            return;
        }

        let center = self.state.control_center();
        let next = dodge_destination(self.state.position.pos, center, pointer, &mut self.rng);
        let target = self.set_target(next, false);
        log::debug!("Dodge from ({:.0}, {:.0}) to ({:.0}, {:.0})", pointer.x, pointer.y, target.x, target.y);

        let flourish = Flourish::random(&mut self.rng);
        if self.settings.effective_flourish() {
            self.state.flourish = Some(flourish);
            self.state.flourish_reset.schedule(now, FLOURISH_MS);
            self.state.emit(WidgetEvent::FlourishStarted(flourish));
        }

        self.register_dodge(now);
    }

    /// Jump to whichever corner (or random spot) is farthest from the pointer
    pub fn teleport_to_farthest_corner(&mut self, pointer: Vec2, now: f64) {
        if self.state.locked {
            return;
        }

        let limits = self.state.limits();
        let candidates = teleport_candidates(&limits, &mut self.rng);
        if let Some(spot) = farthest_spot(&candidates, pointer) {
            let target = self.set_target(spot, false);
            log::debug!("Teleport to ({:.0}, {:.0})", target.x, target.y);
        }

        self.register_dodge(now);
    }

    /// Pick a random spot and ease there, regardless of the pointer
    pub fn teleport(&mut self) {
        let limits = self.state.limits();
        let spot = limits.random_point(&mut self.rng);
        self.set_target(spot, false);
    }

    // === Counter ===

    /// Count a dodge (throttled), pulse the negative control and show a toast
    pub fn register_dodge(&mut self, now: f64) {
        if !self.settings.dodge_counter {
            return;
        }
        if !self.state.counter.register(now) {
            return;
        }

        let count = self.state.counter.count;
        let emphasis = self.state.counter.emphasis();
        log::debug!("Dodge counted: {}", count);
        self.state.emit(WidgetEvent::DodgeCounted { count, emphasis });

        let message = self.state.toast.show(now, &mut self.rng);
        self.state.emit(WidgetEvent::ToastShown(message));
    }

    // === Confirmation ===

    /// The negative control was activated
    pub fn confirm(&mut self, now: f64) {
        if self.state.phase == Phase::Confirmed {
            return;
        }

        self.state.locked = true;
        self.state.phase = Phase::Confirmed;

        let show_retry = self.settings.resettable;
        if show_retry {
            self.state.control_visible = false;
            self.state.retry_visible = true;
        }

        log::info!("Confirmed after {} dodges", self.state.counter.count);
        self.state.emit(WidgetEvent::Confirmed { show_retry });
        self.state.emit(WidgetEvent::Status(Some(messages::CONFIRMED)));
        self.release_confetti(now);
    }

    /// Fire one confetti burst
    pub fn release_confetti(&mut self, now: f64) {
        let id = self.state.next_burst_id();
        let burst = ConfettiBurst::release(id, now, &mut self.rng);
        self.state.bursts.push(burst.clone());
        self.state.emit(WidgetEvent::ConfettiReleased(burst));
    }

    /// Back to the initial state. Only available when resettable.
    pub fn reset(&mut self) {
        if !self.settings.resettable {
            log::warn!("Reset requested but this variant is not resettable");
            return;
        }
        if self.state.phase != Phase::Confirmed {
            log::warn!("Reset requested while still active");
            return;
        }

        self.state.locked = false;
        self.state.phase = Phase::Active;
        self.state.counter.reset();
        self.state.toast.clear();
        self.state.flourish = None;
        self.state.flourish_reset.cancel();
        self.state.control_visible = true;
        self.state.retry_visible = false;

        self.state.emit(WidgetEvent::Reset);
        self.state.emit(WidgetEvent::Status(None));
        self.state.emit(WidgetEvent::ToastHidden);
        self.state.emit(WidgetEvent::FlourishCleared);
        self.state.emit(WidgetEvent::DodgeCounted { count: 0, emphasis: 0 });

        self.teleport();
        log::info!("Widget reset");
    }

    /// Take all queued effects
    pub fn drain_events(&mut self) -> Vec<WidgetEvent> {
        std::mem::take(&mut self.state.events)
    }
}
