//! Main screen listing the registered wishes.
//!
//! Shows an empty-state call to action until wishes exist, then the list
//! with delete and edit actions.

use leptos::prelude::*;

use crate::routes::{AppRoute, NavRequest, use_nav_requests};
use crate::state::wishes::{Wish, WishStore};
use crate::util::dialog::confirm;

const DELETE_CONFIRM_MESSAGE: &str = "Do you really want to delete your wishes?";

#[component]
pub fn WishListPage() -> impl IntoView {
    let store = expect_context::<RwSignal<WishStore>>();
    let nav = use_nav_requests();
    let wishes = Memo::new(move |_| store.with(|s| s.wishes().to_vec()));
    let has_wishes = move || wishes.with(|w| !w.is_empty());

    let go_add = move |_: leptos::ev::MouseEvent| nav.set(Some(NavRequest::push(AppRoute::WishAdd)));
    let go_how_to = move |_: leptos::ev::MouseEvent| nav.set(Some(NavRequest::push(AppRoute::HowTo)));
    let on_delete = move |_: leptos::ev::MouseEvent| {
        if confirm(DELETE_CONFIRM_MESSAGE) {
            store.update(WishStore::clear_wishes);
        }
    };

    view! {
        <div class="wish-list">
            <Show
                when=has_wishes
                fallback=move || {
                    view! {
                        <div class="wish-list__empty">
                            <div>"No wishes registered yet."</div>
                            <div>"Please register your wishes."</div>
                            <button class="button button--primary" on:click=go_add>
                                "Register wishes"
                            </button>
                        </div>
                    }
                }
            >
                <h1 class="wish-list__title">"Registered wishes"</h1>
                <ul class="wish-list__items">
                    <For
                        each=move || wishes.get()
                        key=|wish| (wish.id, wish.reg_date.clone(), wish.title.clone())
                        let:wish
                    >
                        <WishEntry wish=wish/>
                    </For>
                </ul>
                <div class="wish-list__actions">
                    <button class="button button--danger" on:click=on_delete>
                        "Delete wishes"
                    </button>
                    <button class="button button--warning" on:click=go_add>
                        "Edit wishes"
                    </button>
                </div>
            </Show>
            <div class="wish-list__help">
                <button class="button button--accent" on:click=go_how_to>
                    "How to use"
                </button>
            </div>
        </div>
    }
}

#[component]
fn WishEntry(wish: Wish) -> impl IntoView {
    view! {
        <li class="wish">
            <div>"Number: " <span class="badge badge--primary">{wish.id}</span></div>
            <div>"Date: " <span class="badge badge--accent">{wish.reg_date}</span></div>
            <div class="wish__title">
                "Content"
                <br/>
                {wish.title}
            </div>
        </li>
    }
}
