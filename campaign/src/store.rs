//! Durable key-value boundary for persisted campaign fields.
//!
//! Values cross this boundary as their decimal string representations; an
//! absent or malformed value is treated as "not set". Writes are best-effort:
//! callers log a failed write and keep going, because in-memory state is
//! authoritative for the session.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use thiserror::Error;

/// Storage key for the cumulative amount raised.
pub const TOTAL_RAISED_KEY: &str = "totalRaised";

/// Storage key for the donor count.
pub const DONORS_COUNT_KEY: &str = "donorsCount";

/// Storage key for the persisted theme preference.
pub const THEME_KEY: &str = "theme";

/// A write to the durable store failed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No storage backend is reachable (private browsing, non-browser build).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend refused the write (quota exceeded, security error).
    #[error("storage rejected write: {0}")]
    Rejected(String),
}

/// Durable key-value storage scoped to the site.
///
/// Implementations must be total on reads: any failure surfaces as `None`.
pub trait ProgressStore {
    /// Read the raw string stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend is unavailable or refuses
    /// the write. Callers treat this as non-fatal.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Read a non-negative integer stored under `key`, defaulting to 0 when the
/// value is absent or not a decimal number.
#[must_use]
pub fn read_count(store: &dyn ProgressStore, key: &str) -> u64 {
    store
        .read(key)
        .map_or(0, |raw| raw.trim().parse::<u64>().unwrap_or(0))
}

/// In-memory [`ProgressStore`] used by unit tests.
///
/// `set_fail_writes` simulates an unavailable backend so best-effort
/// persistence paths can be exercised.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cells: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with [`StoreError::Unavailable`].
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Seed a key directly, bypassing the failure toggle.
    pub fn seed(&self, key: &str, value: &str) {
        self.cells
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}

impl ProgressStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.cells.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Unavailable);
        }
        self.cells
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
