//! Key/value persistence port backed by browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wish store never touches web-sys directly. It talks to a
//! [`StorageBackend`] so the browser binding stays hydrate-only and tests can
//! swap in [`MemoryStorage`].
//!
//! TRADE-OFFS
//! ==========
//! Values are JSON text. Outside a browser (SSR, native tests) the browser
//! backend behaves as an empty store that accepts and drops writes.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failures reported by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage area is reachable (no window, storage disabled).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend refused a read.
    #[error("storage read failed for {key}: {reason}")]
    Read { key: String, reason: String },

    /// The backend refused a write (quota, private mode).
    #[error("storage write failed for {key}: {reason}")]
    Write { key: String, reason: String },

    /// A stored value is not valid JSON for the expected type.
    #[error("stored value for {key} could not be decoded: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded to JSON.
    #[error("value for {key} could not be encoded: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Text key/value storage used for durable client state.
pub trait StorageBackend: Send + Sync {
    /// Read the raw text stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or rejects the read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            storage.get_item(key).map_err(|e| StorageError::Read {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            storage.set_item(key, value).map_err(|e| StorageError::Write {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

/// In-process storage. Used by tests and anywhere durable storage is not wanted.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Load and decode a JSON value stored under `key`.
///
/// # Errors
///
/// Returns an error if the backend fails or the stored text does not decode
/// as `T`.
pub fn load_json<T: DeserializeOwned>(backend: &dyn StorageBackend, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = backend.read(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Decode { key: key.to_owned(), source })
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns an error if encoding fails or the backend rejects the write.
pub fn save_json<T: Serialize + ?Sized>(backend: &dyn StorageBackend, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode { key: key.to_owned(), source })?;
    backend.write(key, &raw)
}
