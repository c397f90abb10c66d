//! Helpers behind the wish store and pages.
//!
//! `date` formats registration timestamps at UTC+9. `dialog` wraps the
//! blocking alert and confirm prompts plus history back. `storage` is the
//! localStorage port the wish store persists through. Browser calls are
//! no-ops outside the `hydrate` build.

pub mod date;
pub mod dialog;
pub mod storage;
