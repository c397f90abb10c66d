use super::*;

use chrono::{DateTime, TimeZone, Utc};

use crate::util::storage::{MemoryStorage, StorageError};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()))
}

fn titles(a: &str, b: &str, c: &str) -> WishTitles {
    [a.to_owned(), b.to_owned(), c.to_owned()]
}

fn open_store(storage: &Arc<MemoryStorage>) -> WishStore {
    WishStore::open(storage.clone(), fixed_clock())
}

/// Backend that rejects every operation.
struct BrokenStorage;

impl StorageBackend for BrokenStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// =============================================================
// Defaults and loading
// =============================================================

#[test]
fn fresh_store_has_no_wishes_and_zero_run_count() {
    let store = open_store(&Arc::new(MemoryStorage::new()));
    assert!(store.wishes().is_empty());
    assert_eq!(store.run_count(), 0);
    assert!(store.is_first_run());
}

#[test]
fn new_store_is_not_loaded_until_asked() {
    let storage = Arc::new(MemoryStorage::new());
    storage.write(RUN_COUNT_KEY, "4").unwrap();

    let mut store = WishStore::new(storage, fixed_clock());
    assert!(!store.is_loaded());
    assert_eq!(store.run_count(), 0);

    assert!(store.ensure_loaded());
    assert_eq!(store.run_count(), 4);
    assert!(!store.ensure_loaded());
}

#[test]
fn state_survives_reopening_on_same_storage() {
    let storage = Arc::new(MemoryStorage::new());
    {
        let mut store = open_store(&storage);
        store.replace_all_wishes(titles("a", "b", "c"));
        store.increment_run_count();
    }

    let reopened = open_store(&storage);
    assert_eq!(reopened.run_count(), 1);
    let got: Vec<_> = reopened.wishes().iter().map(|w| w.title.as_str()).collect();
    assert_eq!(got, ["a", "b", "c"]);
}

#[test]
fn undecodable_persisted_wishes_fall_back_to_empty() {
    let storage = Arc::new(MemoryStorage::new());
    storage.write(WISHES_KEY, "{broken").unwrap();
    storage.write(RUN_COUNT_KEY, "2").unwrap();

    let store = open_store(&storage);
    assert!(store.wishes().is_empty());
    assert_eq!(store.run_count(), 2);
}

#[test]
fn persisted_layout_uses_camel_case_fields() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = open_store(&storage);
    store.add_wish("travel");

    let raw = storage.read(WISHES_KEY).unwrap().unwrap();
    assert_eq!(raw, r#"[{"id":1,"regDate":"2024-01-02 12:04:05","title":"travel"}]"#);
}

// =============================================================
// add_wish
// =============================================================

#[test]
fn add_wish_assigns_positional_ids() {
    let mut store = open_store(&Arc::new(MemoryStorage::new()));
    assert_eq!(store.add_wish("one").id, 1);
    assert_eq!(store.add_wish("two").id, 2);

    let first_read = store.wishes().to_vec();
    let second_read = store.wishes().to_vec();
    assert_eq!(first_read, second_read);
    assert_eq!(first_read.len(), 2);
}

#[test]
fn add_wish_stamps_registration_date_from_clock() {
    let mut store = open_store(&Arc::new(MemoryStorage::new()));
    let wish = store.add_wish("x").clone();
    assert_eq!(wish.reg_date, "2024-01-02 12:04:05");
}

#[test]
fn add_wish_does_not_enforce_a_limit() {
    let mut store = open_store(&Arc::new(MemoryStorage::new()));
    for i in 0..5 {
        store.add_wish(format!("wish {i}"));
    }
    assert_eq!(store.wishes().len(), 5);
    assert_eq!(store.wishes()[4].id, 5);
}

// =============================================================
// replace_all_wishes
// =============================================================

#[test]
fn replace_all_yields_three_records_in_order() {
    let mut store = open_store(&Arc::new(MemoryStorage::new()));
    store.replace_all_wishes(titles("health", "family", "work"));

    let ids: Vec<u32> = store.wishes().iter().map(|w| w.id).collect();
    let got: Vec<&str> = store.wishes().iter().map(|w| w.title.as_str()).collect();
    assert_eq!(ids, [1, 2, 3]);
    assert_eq!(got, ["health", "family", "work"]);
}

#[test]
fn replace_all_discards_previous_wishes_and_renumbers() {
    let mut store = open_store(&Arc::new(MemoryStorage::new()));
    for t in ["old1", "old2", "old3", "old4"] {
        store.add_wish(t);
    }
    store.replace_all_wishes(titles("n1", "n2", "n3"));

    assert_eq!(store.wishes().len(), 3);
    assert_eq!(store.wishes()[0].id, 1);
    assert_eq!(store.wishes()[2].title, "n3");
}

// =============================================================
// clear_wishes
// =============================================================

#[test]
fn clear_wishes_empties_regardless_of_prior_state() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = open_store(&storage);
    store.clear_wishes();
    assert!(store.wishes().is_empty());

    store.replace_all_wishes(titles("a", "b", "c"));
    store.clear_wishes();
    store.clear_wishes();
    assert!(store.wishes().is_empty());
    assert_eq!(storage.read(WISHES_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn ids_restart_at_one_after_clear() {
    let mut store = open_store(&Arc::new(MemoryStorage::new()));
    store.add_wish("a");
    store.add_wish("b");
    store.clear_wishes();
    assert_eq!(store.add_wish("c").id, 1);
}

// =============================================================
// Run counter
// =============================================================

#[test]
fn increment_run_count_is_monotonic_and_persisted() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = open_store(&storage);
    assert_eq!(store.increment_run_count(), 1);
    assert!(!store.is_first_run());
    assert_eq!(store.increment_run_count(), 2);
    assert_eq!(storage.read(RUN_COUNT_KEY).unwrap().as_deref(), Some("2"));
}

#[test]
fn increment_run_count_saturates() {
    let storage = Arc::new(MemoryStorage::new());
    storage.write(RUN_COUNT_KEY, &u32::MAX.to_string()).unwrap();
    let mut store = open_store(&storage);
    assert_eq!(store.increment_run_count(), u32::MAX);
}

// =============================================================
// Best-effort persistence
// =============================================================

#[test]
fn broken_storage_keeps_in_memory_state() {
    let mut store = WishStore::open(Arc::new(BrokenStorage), fixed_clock());
    assert!(store.wishes().is_empty());

    store.replace_all_wishes(titles("a", "b", "c"));
    assert_eq!(store.wishes().len(), 3);
    assert_eq!(store.increment_run_count(), 1);
}
