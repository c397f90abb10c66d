//! Logical routes of the app, their URL paths, and navigation requests.
//!
//! DESIGN
//! ======
//! Event handlers and timers do not call the router directly. They post a
//! [`NavRequest`] into a signal and one effect per page performs the
//! navigation, the same way state-driven redirects are handled elsewhere.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// The four screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Splash,
    HowTo,
    Main,
    WishAdd,
}

impl AppRoute {
    pub fn path(self) -> &'static str {
        match self {
            Self::Splash => "/",
            Self::HowTo => "/home/howTo",
            Self::Main => "/home/main",
            Self::WishAdd => "/wish/add",
        }
    }
}

/// Whether a navigation adds a history entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMode {
    Push,
    Replace,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavRequest {
    pub route: AppRoute,
    pub mode: NavMode,
}

impl NavRequest {
    pub fn push(route: AppRoute) -> Self {
        Self { route, mode: NavMode::Push }
    }

    pub fn replace(route: AppRoute) -> Self {
        Self { route, mode: NavMode::Replace }
    }

    pub fn options(self) -> NavigateOptions {
        NavigateOptions {
            replace: self.mode == NavMode::Replace,
            ..NavigateOptions::default()
        }
    }
}

/// Signal whose writes are turned into router navigations.
///
/// Must be called from a component rendered inside `<Router>`.
pub fn use_nav_requests() -> RwSignal<Option<NavRequest>> {
    let requests = RwSignal::new(None::<NavRequest>);
    let navigate = use_navigate();
    Effect::new(move || {
        let Some(request) = requests.get() else {
            return;
        };
        requests.set(None);
        navigate(request.route.path(), request.options());
    });
    requests
}
