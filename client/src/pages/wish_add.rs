//! Add/edit form for the three wishes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fields are pre-filled from the store. Submission validates in field order,
//! stops at the first blank field with a blocking prompt, and only then hands
//! exactly three trimmed titles to `WishStore::replace_all_wishes`.

#[cfg(test)]
#[path = "wish_add_test.rs"]
mod wish_add_test;

use leptos::html::Textarea;
use leptos::prelude::*;

use crate::routes::{AppRoute, NavRequest, use_nav_requests};
use crate::state::wishes::{WISH_COUNT, WishStore, WishTitles};
use crate::util::dialog::{alert, history_back};

const FIELD_LABELS: [&str; WISH_COUNT] = ["First wish", "Second wish", "Third wish"];
const FIELD_PLACEHOLDERS: [&str; WISH_COUNT] = [
    "Enter your first wish. (multiple lines allowed)",
    "Enter your second wish. (multiple lines allowed)",
    "Enter your third wish. (multiple lines allowed)",
];
const REGISTERED_MESSAGE: &str = "Your wishes have been registered.";

/// A blank field found while validating the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WishInputError {
    #[error("Please enter your first wish.")]
    MissingFirst,
    #[error("Please enter your second wish.")]
    MissingSecond,
    #[error("Please enter your third wish.")]
    MissingThird,
}

impl WishInputError {
    fn for_field(index: usize) -> Self {
        match index {
            0 => Self::MissingFirst,
            1 => Self::MissingSecond,
            _ => Self::MissingThird,
        }
    }

    /// Zero-based index of the offending field.
    pub fn field_index(self) -> usize {
        match self {
            Self::MissingFirst => 0,
            Self::MissingSecond => 1,
            Self::MissingThird => 2,
        }
    }
}

/// Trim fields in order, writing each trimmed value back, and stop at the
/// first one left empty. Fields after the failing one are untouched.
///
/// # Errors
///
/// Returns the first field that is empty after trimming.
pub fn normalize_wish_inputs(fields: &mut WishTitles) -> Result<WishTitles, WishInputError> {
    for (index, field) in fields.iter_mut().enumerate() {
        *field = field.trim().to_owned();
        if field.is_empty() {
            return Err(WishInputError::for_field(index));
        }
    }
    Ok(fields.clone())
}

/// Validate the form and, when every field is filled, register the trimmed
/// titles. Returns where to go next. On error the store is left untouched.
///
/// # Errors
///
/// Returns the first field that is empty after trimming.
pub fn submit_wishes(store: &mut WishStore, fields: &mut WishTitles) -> Result<NavRequest, WishInputError> {
    let titles = normalize_wish_inputs(fields)?;
    store.replace_all_wishes(titles);
    Ok(NavRequest::replace(AppRoute::Main))
}

fn focus_field(field: NodeRef<Textarea>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = field.get_untracked() {
            let _ = el.focus();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = field;
    }
}

#[component]
pub fn WishAddPage() -> impl IntoView {
    let store = expect_context::<RwSignal<WishStore>>();
    let nav = use_nav_requests();
    let drafts = RwSignal::new(WishTitles::default());
    let field_refs: [NodeRef<Textarea>; WISH_COUNT] = std::array::from_fn(|_| NodeRef::new());

    // Follow the store so edits start from the registered wishes.
    Effect::new(move || {
        let titles: Vec<String> = store.with(|s| s.wishes().iter().take(WISH_COUNT).map(|w| w.title.clone()).collect());
        drafts.update(|d| {
            for (slot, title) in d.iter_mut().zip(titles) {
                *slot = title;
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut fields = drafts.get_untracked();
        let Some(result) = store.try_update(|s| submit_wishes(s, &mut fields)) else {
            return;
        };
        drafts.set(fields);
        match result {
            Err(err) => {
                alert(&err.to_string());
                focus_field(field_refs[err.field_index()]);
            }
            Ok(next) => {
                alert(REGISTERED_MESSAGE);
                nav.set(Some(next));
            }
        }
    };

    let fields = (0..WISH_COUNT)
        .map(|i| {
            let id = format!("wish-field-{}", i + 1);
            view! {
                <div class="form-control">
                    <label class="form-control__label" for=id.clone()>
                        {FIELD_LABELS[i]}
                    </label>
                    <textarea
                        id=id
                        node_ref=field_refs[i]
                        class="form-control__textarea"
                        rows="3"
                        placeholder=FIELD_PLACEHOLDERS[i]
                        autofocus={i == 0}
                        prop:value=move || drafts.with(|d| d[i].clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            drafts.update(|d| d[i] = value);
                        }
                    ></textarea>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="wish-add">
            <form class="wish-add__form" on:submit=on_submit>
                {fields}
                <div class="wish-add__actions">
                    <button type="submit" class="button button--primary">
                        "Register wishes"
                    </button>
                    <button type="button" class="button button--warning" on:click=move |_| history_back()>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
