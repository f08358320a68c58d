//! # Storage Layer
//!
//! A thin key-value persistence abstraction. The [`StorageBackend`] trait
//! handles the "how" of storage (filesystem vs memory), while [`RecordStore`]
//! handles the "what": typed get/set of whole JSON records.
//!
//! There is deliberately no partial-update primitive. Callers read the full
//! record, mutate a copy, and write the whole thing back. Missing or corrupt
//! values degrade to an empty default rather than failing the caller; the
//! store is a best-effort local cache, not a system of record.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage, one `<key>.json` per logical key
//! - [`memory::MemBackend`]: in-memory storage for tests, no persistence

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

pub mod fs;
pub mod memory;

/// Logical record keys. Names match the persisted JSON format.
pub mod keys {
    pub const SAVED_TRAININGS: &str = "savedTrainings";
    pub const DAILY_EXERCISES: &str = "dailyExercises";
    pub const SAVED_FOODS: &str = "savedFoods";
    pub const DAILY_FOODS: &str = "dailyFoods";
    pub const APP_SETTINGS: &str = "appSettings";
}

/// Abstract interface for raw storage I/O.
pub trait StorageBackend {
    /// Read the raw payload for a key. `Ok(None)` if the key has never been
    /// written; `Err` only on actual I/O failure.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the payload for a key in full.
    fn write(&self, key: &str, payload: &str) -> Result<()>;
}

/// Typed record access over a [`StorageBackend`].
pub struct RecordStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Load the record at `key`, or `T::default()` if the key is missing,
    /// unreadable, or unparseable. Degradation is logged, never surfaced.
    pub fn get<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.backend.read(key) {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(value) => value,
                Err(err) => {
                    warn!(key, %err, "discarding unparseable record");
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(err) => {
                warn!(key, %err, "failed to read record");
                T::default()
            }
        }
    }

    /// Replace the record at `key` in full.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let payload = serde_json::to_string_pretty(value)?;
        self.backend.write(key, &payload)
    }
}
