//! localStorage Store
//!
//! `KeyValueStore` over `window.localStorage`.

use todo_core::{KeyValueStore, TodoError, TodoResult};

use super::js_error;

/// Store backed by `window.localStorage`.
///
/// When storage is unavailable (private mode, disabled cookies) every call
/// fails and the controller keeps working in memory.
#[derive(Clone)]
pub struct BrowserStore {
    storage: Option<web_sys::Storage>,
}

impl BrowserStore {
    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, todos will not be persisted");
        }
        Self { storage }
    }

    fn storage(&self) -> TodoResult<&web_sys::Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| TodoError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> TodoResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| TodoError::Storage(js_error(e)))
    }

    fn set(&self, key: &str, value: &str) -> TodoResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| TodoError::Storage(js_error(e)))
    }
}
