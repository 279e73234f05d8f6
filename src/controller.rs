//! Carousel controller - single source of truth for the rendering layer
//!
//! Owns the gallery position, the run state and the auto-advance timer.
//! Everything runs on one thread: the GUI frame loop calls [`CarouselController::pump`]
//! for timer firings and [`CarouselController::handle`] for clicks, each
//! running to completion before the next.

use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::carousel_state::CarouselState;
use crate::constants::{timing::ADVANCE_PERIOD, GALLERY};
use crate::timer::PeriodicTimer;
use crate::types::{CarouselEvent, ImageRef, RunState, Snapshot};

/// Change listener, called with the post-change snapshot
pub type Listener = Box<dyn FnMut(&Snapshot)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct CarouselController {
    state: CarouselState,
    run_state: RunState,

    /// Present exactly while running
    timer: Option<PeriodicTimer>,
    period: Duration,

    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl CarouselController {
    /// Start over the built-in gallery, running, at index 0
    pub fn new(now: Instant) -> Self {
        Self::with_gallery(&GALLERY, ADVANCE_PERIOD, now)
    }

    pub fn with_gallery(gallery: &'static [ImageRef], period: Duration, now: Instant) -> Self {
        info!(
            images = gallery.len(),
            ?period,
            "carousel started"
        );
        Self {
            state: CarouselState::new(gallery),
            run_state: RunState::Running,
            timer: Some(PeriodicTimer::start(now, period)),
            period,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_image: self.state.current_image(),
            index: self.state.current_index(),
            running: self.run_state.is_running(),
        }
    }

    /// When the next auto-advance is due, if running
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.as_ref().map(PeriodicTimer::next_deadline)
    }

    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        debug!(?id, "listener subscribed");
        id
    }

    /// Returns false if the id was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        before != self.listeners.len()
    }

    /// Dispatch a renderer interaction
    pub fn handle(&mut self, event: CarouselEvent, now: Instant) {
        match event {
            CarouselEvent::ToggleRun => self.toggle_run(now),
            CarouselEvent::Next => self.next(),
            CarouselEvent::Previous => self.previous(),
        }
    }

    /// Manual next, regardless of run state
    pub fn next(&mut self) {
        self.state.advance();
        self.notify();
    }

    /// Manual previous, regardless of run state
    pub fn previous(&mut self) {
        self.state.retreat();
        self.notify();
    }

    pub fn toggle_run(&mut self, now: Instant) {
        self.set_run_state(self.run_state.toggled(), now);
    }

    /// Any assignment cancels the current timer and, if running, starts a
    /// fresh one whose first firing is one full period after `now`.
    pub fn set_run_state(&mut self, run_state: RunState, now: Instant) {
        self.run_state = run_state;
        self.timer = run_state
            .is_running()
            .then(|| PeriodicTimer::start(now, self.period));

        info!(running = run_state.is_running(), "run state changed");
        self.notify();
    }

    /// Run every auto-advance due at `now`. Returns the number of advances.
    pub fn pump(&mut self, now: Instant) -> u32 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };

        let fired = timer.fire_due(now);
        for _ in 0..fired {
            debug!("auto-advance timer fired");
            self.state.advance();
            self.notify();
        }
        fired
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }
}

impl Drop for CarouselController {
    fn drop(&mut self) {
        if self.timer.take().is_some() {
            debug!("auto-advance timer cancelled on teardown");
        }
        info!("carousel stopped");
    }
}
