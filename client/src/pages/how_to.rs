//! Onboarding carousel explaining how to write wishes.

use leptos::prelude::*;

use crate::components::carousel::Carousel;
use crate::routes::{AppRoute, NavRequest, use_nav_requests};

#[component]
pub fn HowToPage() -> impl IntoView {
    let nav = use_nav_requests();
    let on_start = move |_: leptos::ev::MouseEvent| nav.set(Some(NavRequest::replace(AppRoute::Main)));

    let slides = vec![
        view! { <div>"How to use"</div> }.into_any(),
        view! { <div>"Enter three wishes."</div> }.into_any(),
        view! { <div>"Once entered, wishes can't be changed for 4 weeks."</div> }.into_any(),
        view! { <div>"Write your wishes as already fulfilled, not as requests."</div> }.into_any(),
        view! {
            <div>
                "I hope I win first place on the show. ("
                <span class="mark mark--wrong">"x"</span>
                ")"
            </div>
        }
        .into_any(),
        view! {
            <div>
                "Please, please let me win first place on the show. ("
                <span class="mark mark--wrong">"x"</span>
                ")"
            </div>
        }
        .into_any(),
        view! {
            <div>
                "I proudly took first place on the show, and I'm so happy and grateful. ("
                <span class="mark mark--right">"o"</span>
                ")"
            </div>
        }
        .into_any(),
        view! {
            <div class="how-to__finale">
                <div>"Every 4 weeks, make three new wishes come true."</div>
                <button class="button button--primary" on:click=on_start>
                    "Start"
                </button>
            </div>
        }
        .into_any(),
    ];

    view! {
        <div class="how-to">
            <Carousel slides=slides />
        </div>
    }
}
