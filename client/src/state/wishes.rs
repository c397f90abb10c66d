//! Wish list store and run counter.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only mutation path for wish data. Pages hold the store inside
//! an `RwSignal<WishStore>` provided by `App` and call into it; every
//! mutation is written through the injected [`StorageBackend`] before it
//! returns.
//!
//! DESIGN
//! ======
//! The store starts with defaults and loads persisted state lazily through
//! [`WishStore::ensure_loaded`]. The first client render then matches the
//! server render, and the load happens in a post-hydration effect.
//!
//! Ids are positional (`len + 1` at insertion). They are unique within one
//! replace-all batch and contiguous from 1 after any replace-all or clear.

#[cfg(test)]
#[path = "wishes_test.rs"]
mod wishes_test;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::util::date::{Clock, SystemClock, format_reg_date};
use crate::util::storage::{BrowserStorage, StorageBackend, load_json, save_json};

/// Storage key for the persisted wish sequence.
pub const WISHES_KEY: &str = "wish_app/wishes";
/// Storage key for the persisted run counter.
pub const RUN_COUNT_KEY: &str = "wish_app/app_run_count";
/// Number of wishes a user registers at once.
pub const WISH_COUNT: usize = 3;

/// Titles for one full replace-all batch.
pub type WishTitles = [String; WISH_COUNT];

/// A single registered wish.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wish {
    /// 1-based position at creation time.
    pub id: u32,
    /// Registration time, `YYYY-MM-DD HH:MM:SS`.
    pub reg_date: String,
    pub title: String,
}

pub struct WishStore {
    wishes: Vec<Wish>,
    run_count: u32,
    loaded: bool,
    storage: Arc<dyn StorageBackend>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for WishStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WishStore")
            .field("wishes", &self.wishes)
            .field("run_count", &self.run_count)
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}

impl WishStore {
    /// Create a store with default state. Nothing is read until
    /// [`ensure_loaded`](Self::ensure_loaded).
    pub fn new(storage: Arc<dyn StorageBackend>, clock: Arc<dyn Clock>) -> Self {
        Self {
            wishes: Vec::new(),
            run_count: 0,
            loaded: false,
            storage,
            clock,
        }
    }

    /// Create a store and load persisted state immediately.
    pub fn open(storage: Arc<dyn StorageBackend>, clock: Arc<dyn Clock>) -> Self {
        let mut store = Self::new(storage, clock);
        store.ensure_loaded();
        store
    }

    /// Store backed by browser `localStorage` and the system clock.
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage), Arc::new(SystemClock))
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Load persisted state once. Returns `true` if this call did the load.
    ///
    /// Missing entries keep their defaults. Unreadable or undecodable
    /// entries are logged and also fall back to defaults.
    pub fn ensure_loaded(&mut self) -> bool {
        if self.loaded {
            return false;
        }
        self.loaded = true;

        match load_json::<Vec<Wish>>(self.storage.as_ref(), WISHES_KEY) {
            Ok(Some(wishes)) => self.wishes = wishes,
            Ok(None) => {}
            Err(e) => log::warn!("ignoring persisted wishes: {e}"),
        }
        match load_json::<u32>(self.storage.as_ref(), RUN_COUNT_KEY) {
            Ok(Some(count)) => self.run_count = count,
            Ok(None) => {}
            Err(e) => log::warn!("ignoring persisted run count: {e}"),
        }
        true
    }

    /// Current wishes in insertion order.
    pub fn wishes(&self) -> &[Wish] {
        &self.wishes
    }

    pub fn run_count(&self) -> u32 {
        self.run_count
    }

    /// `true` until the first splash cycle has completed.
    pub fn is_first_run(&self) -> bool {
        self.run_count == 0
    }

    /// Append a wish numbered after the current length. No uniqueness or
    /// length limit is enforced here.
    pub fn add_wish(&mut self, title: impl Into<String>) -> &Wish {
        self.push_wish(title.into());
        self.persist_wishes();
        let last = self.wishes.len() - 1;
        &self.wishes[last]
    }

    /// Replace the whole list with exactly three fresh wishes (ids 1..=3).
    ///
    /// Callers are expected to pass trimmed, non-empty titles.
    pub fn replace_all_wishes(&mut self, titles: WishTitles) {
        self.wishes.clear();
        for title in titles {
            self.push_wish(title);
        }
        self.persist_wishes();
    }

    /// Remove every wish. Idempotent.
    pub fn clear_wishes(&mut self) {
        self.wishes.clear();
        self.persist_wishes();
    }

    /// Count one completed splash cycle. Returns the new value.
    pub fn increment_run_count(&mut self) -> u32 {
        self.run_count = self.run_count.saturating_add(1);
        if let Err(e) = save_json(self.storage.as_ref(), RUN_COUNT_KEY, &self.run_count) {
            log::warn!("run count not persisted: {e}");
        }
        self.run_count
    }

    fn push_wish(&mut self, title: String) {
        let id = u32::try_from(self.wishes.len() + 1).unwrap_or(u32::MAX);
        let reg_date = format_reg_date(self.clock.now());
        self.wishes.push(Wish { id, reg_date, title });
    }

    fn persist_wishes(&self) {
        if let Err(e) = save_json(self.storage.as_ref(), WISHES_KEY, &self.wishes) {
            log::warn!("wishes not persisted: {e}");
        }
    }
}
