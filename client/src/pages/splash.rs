//! Splash screen that decides between onboarding and the wish list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/` and for unknown paths. In the browser it loads the store,
//! arms the transition timer through [`SplashLifecycle`] and counts the run
//! when the page is torn down.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[cfg(feature = "hydrate")]
use crate::routes::{NavRequest, use_nav_requests};
#[cfg(feature = "hydrate")]
use crate::state::splash::{SPLASH_DELAY, SplashLifecycle, teardown_splash};
#[cfg(feature = "hydrate")]
use crate::state::wishes::WishStore;

#[cfg(feature = "hydrate")]
type SharedLifecycle = Arc<Mutex<Option<SplashLifecycle<TimeoutHandle>>>>;

#[cfg(feature = "hydrate")]
fn lock(lifecycle: &SharedLifecycle) -> MutexGuard<'_, Option<SplashLifecycle<TimeoutHandle>>> {
    lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
}

#[component]
pub fn SplashPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let store = expect_context::<RwSignal<WishStore>>();
        let nav = use_nav_requests();
        let lifecycle: SharedLifecycle = Arc::new(Mutex::new(None));

        let mount_slot = Arc::clone(&lifecycle);
        Effect::new(move || {
            let mut slot = lock(&mount_slot);
            if slot.is_some() {
                return;
            }
            let run_count = store
                .try_update(|s| {
                    s.ensure_loaded();
                    s.run_count()
                })
                .unwrap_or_default();
            let mut cycle = SplashLifecycle::mount(run_count);
            log::debug!("splash: run {run_count}, next stop {}", cycle.destination().path());

            let fire_slot = Arc::clone(&mount_slot);
            let armed = set_timeout_with_handle(
                move || {
                    let route = lock(&fire_slot).as_mut().and_then(SplashLifecycle::fire);
                    if let Some(route) = route {
                        nav.set(Some(NavRequest::replace(route)));
                    }
                },
                SPLASH_DELAY,
            );
            match armed {
                Ok(handle) => cycle.arm(handle),
                Err(e) => log::warn!("splash timer not armed: {e:?}"),
            }
            *slot = Some(cycle);
        });

        on_cleanup(move || {
            let mut slot = lock(&lifecycle);
            store.try_update(|s| teardown_splash(slot.as_mut(), s));
        });
    }

    view! {
        <div class="splash">
            <div class="splash__tagline">"We grant your wishes."</div>
        </div>
    }
}
