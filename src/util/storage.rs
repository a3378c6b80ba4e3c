//! localStorage-backed implementation of the campaign progress store.

use campaign::store::{ProgressStore, StoreError};

/// Durable browser storage scoped to the site origin.
///
/// Outside a browser build, or when localStorage is blocked, reads yield
/// `None` and writes report [`StoreError::Unavailable`]; the page then
/// behaves like a first visit and totals live only in memory.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl ProgressStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(StoreError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|err| StoreError::Rejected(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }
}
