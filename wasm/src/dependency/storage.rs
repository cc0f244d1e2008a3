use std::collections::HashMap;

use crate::error::StoreError;

/// Minimal string key-value storage, shaped after the Web Storage API
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process storage for native builds and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    /// Storage that rejects every write, like a full quota
    pub fn read_only() -> Self {
        Self {
            items: HashMap::new(),
            read_only: true,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Write("storage is read-only".to_string()));
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`. When storage is disabled every read and write
/// reports `Unavailable`, which the submission store treats as no data.
#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage {
    inner: Result<web_sys::Storage, StoreError>,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    pub fn local() -> Self {
        let inner = open_local_storage();
        if let Err(err) = &inner {
            tracing::warn!("{err}");
        }
        Self { inner }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StoreError> {
        self.inner.as_ref().map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
fn open_local_storage() -> Result<web_sys::Storage, StoreError> {
    let window =
        web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StoreError::Unavailable(super::js_error_text(&e)))?
        .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Read(super::js_error_text(&e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(super::js_error_text(&e)))
    }
}
