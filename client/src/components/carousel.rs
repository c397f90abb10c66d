//! Slide carousel with arrows, progress bar, keyboard and swipe navigation.
//!
//! DESIGN
//! ======
//! Slides are laid out side by side in a track that is shifted by the
//! current index. Navigation clamps at both ends. The only resource held
//! outside the component tree is the window `keydown` listener, which is
//! removed on cleanup.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use leptos::prelude::*;

/// Minimum horizontal pointer travel, in CSS pixels, that counts as a swipe.
pub const SWIPE_THRESHOLD_PX: i32 = 50;

/// Position within a fixed number of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// State sized to the given slides.
    #[must_use]
    pub fn for_slides<T>(slides: &[T]) -> Self {
        Self::new(slides.len())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.len
    }

    pub fn next(&mut self) {
        if !self.is_last() {
            self.index += 1;
        }
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Fraction of slides seen so far, for the progress bar.
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        (self.index + 1) as f64 / self.len as f64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Prev,
}

/// Classify a horizontal drag from `start_x` to `end_x`.
pub fn swipe_direction(start_x: i32, end_x: i32) -> Option<SwipeDirection> {
    let delta = end_x - start_x;
    if delta <= -SWIPE_THRESHOLD_PX {
        Some(SwipeDirection::Next)
    } else if delta >= SWIPE_THRESHOLD_PX {
        Some(SwipeDirection::Prev)
    } else {
        None
    }
}

/// Horizontal carousel over `slides`, each wrapped in a `.carousel__slide`.
#[component]
pub fn Carousel(slides: Vec<AnyView>) -> impl IntoView {
    let state = RwSignal::new(CarouselState::for_slides(&slides));
    let drag_start_x = RwSignal::new(None::<i32>);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| match ev.key().as_str() {
            "ArrowRight" => state.update(CarouselState::next),
            "ArrowLeft" => state.update(CarouselState::prev),
            _ => {}
        });
        on_cleanup(move || handle.remove());
    }

    let on_pointer_up = move |ev: leptos::ev::PointerEvent| {
        let Some(start_x) = drag_start_x.get_untracked() else {
            return;
        };
        drag_start_x.set(None);
        match swipe_direction(start_x, ev.client_x()) {
            Some(SwipeDirection::Next) => state.update(CarouselState::next),
            Some(SwipeDirection::Prev) => state.update(CarouselState::prev),
            None => {}
        }
    };

    view! {
        <div
            class="carousel"
            on:pointerdown=move |ev: leptos::ev::PointerEvent| drag_start_x.set(Some(ev.client_x()))
            on:pointerup=on_pointer_up
            on:pointercancel=move |_| drag_start_x.set(None)
        >
            <div
                class="carousel__track"
                style:transform=move || format!("translateX(-{}%)", state.get().index() * 100)
            >
                {slides.into_iter().map(|slide| view! { <div class="carousel__slide">{slide}</div> }).collect_view()}
            </div>
            <button
                class="carousel__arrow carousel__arrow--prev"
                aria-label="Previous slide"
                disabled=move || state.get().is_first()
                on:click=move |_| state.update(CarouselState::prev)
            >
                "‹"
            </button>
            <button
                class="carousel__arrow carousel__arrow--next"
                aria-label="Next slide"
                disabled=move || state.get().is_last()
                on:click=move |_| state.update(CarouselState::next)
            >
                "›"
            </button>
            <div class="carousel__progress">
                <div
                    class="carousel__progress-fill"
                    style:width=move || format!("{:.2}%", state.get().progress() * 100.0)
                ></div>
            </div>
        </div>
    }
}
