//! First-run routing lifecycle of the splash screen.
//!
//! DESIGN
//! ======
//! The splash page mounts a [`SplashLifecycle`], arms a single-fire timer and
//! keeps the handle here. When the timer fires the lifecycle yields the
//! destination chosen at mount. Teardown cancels any pending timer first and
//! then counts the run exactly once, so a fast unmount never navigates and
//! never double-counts.

#[cfg(test)]
#[path = "splash_test.rs"]
mod splash_test;

use std::time::Duration;

use crate::routes::AppRoute;
use crate::state::wishes::WishStore;

/// Delay before leaving the splash screen.
pub const SPLASH_DELAY: Duration = Duration::from_millis(1500);

/// A scheduled callback that can be called off before it fires.
pub trait Cancel {
    fn cancel(self);
}

#[cfg(feature = "hydrate")]
impl Cancel for leptos::prelude::TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashPhase {
    AwaitingTransition,
    Transitioned,
    TornDown,
}

/// Pick the screen after the splash from the run count seen at mount.
pub fn destination_for(run_count: u32) -> AppRoute {
    if run_count == 0 { AppRoute::HowTo } else { AppRoute::Main }
}

#[derive(Debug)]
pub struct SplashLifecycle<T> {
    destination: AppRoute,
    phase: SplashPhase,
    timer: Option<T>,
    counted: bool,
}

impl<T: Cancel> SplashLifecycle<T> {
    /// Start a cycle. The destination is fixed here and never re-evaluated.
    pub fn mount(run_count: u32) -> Self {
        Self {
            destination: destination_for(run_count),
            phase: SplashPhase::AwaitingTransition,
            timer: None,
            counted: false,
        }
    }

    pub fn destination(&self) -> AppRoute {
        self.destination
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Keep the handle of the transition timer. A timer armed after teardown
    /// is cancelled on the spot.
    pub fn arm(&mut self, timer: T) {
        if self.phase == SplashPhase::TornDown {
            timer.cancel();
            return;
        }
        if let Some(previous) = self.timer.replace(timer) {
            previous.cancel();
        }
    }

    /// Timer callback. Returns the route to navigate to, or `None` once the
    /// cycle has already transitioned or been torn down.
    pub fn fire(&mut self) -> Option<AppRoute> {
        if self.phase != SplashPhase::AwaitingTransition {
            return None;
        }
        // Fired timers need no cancel.
        self.timer = None;
        self.phase = SplashPhase::Transitioned;
        Some(self.destination)
    }

    /// End the cycle: cancel the pending timer, then count the run once.
    /// Returns `true` if this call incremented the counter.
    pub fn teardown(&mut self, store: &mut WishStore) -> bool {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        self.phase = SplashPhase::TornDown;
        if self.counted {
            return false;
        }
        self.counted = true;
        store.increment_run_count();
        true
    }
}

/// Teardown for a splash page whose mount effect may never have run. With no
/// cycle the persisted counter is loaded and the run is still counted once.
/// Returns `true` if this call incremented the counter.
pub fn teardown_splash<T: Cancel>(cycle: Option<&mut SplashLifecycle<T>>, store: &mut WishStore) -> bool {
    match cycle {
        Some(cycle) => cycle.teardown(store),
        None => {
            store.ensure_loaded();
            store.increment_run_count();
            true
        }
    }
}
