use serde_json::Value;
use tracing::{debug, warn};

use crate::constants::DEFAULT_STORAGE_PREFIX;
use crate::dependency::KeyValueStore;
use crate::error::StoreError;
use crate::types::{SongKey, StoredSubmission};

/// Append-only list of locally submitted runs, one list per song.
///
/// Reads never fail: missing, unreadable or corrupted data is an empty list.
pub struct LocalSubmissionStore<S: KeyValueStore> {
    storage: S,
    prefix: String,
}

impl<S: KeyValueStore> LocalSubmissionStore<S> {
    pub fn new(storage: S, prefix: &str) -> Self {
        Self {
            storage,
            prefix: prefix.to_string(),
        }
    }

    pub fn with_default_prefix(storage: S) -> Self {
        Self::new(storage, DEFAULT_STORAGE_PREFIX)
    }

    pub fn storage_key(&self, key: &SongKey) -> String {
        format!("{}{}", self.prefix, key.storage_suffix())
    }

    /// Raw stored records in insertion order
    pub fn load(&self, key: &SongKey) -> Vec<Value> {
        let storage_key = self.storage_key(key);
        let raw = match self.storage.get_item(&storage_key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return Vec::new(),
            Err(err) => {
                warn!("Local submissions for {storage_key} unreadable: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(records)) => records,
            Ok(_) => {
                warn!("Local submissions for {storage_key} are not a list, ignoring");
                Vec::new()
            }
            Err(err) => {
                warn!("Local submissions for {storage_key} corrupted: {err}");
                Vec::new()
            }
        }
    }

    /// Append one entry and write the whole list back. Returns the new length.
    pub fn append(&mut self, key: &SongKey, entry: &StoredSubmission) -> Result<usize, StoreError> {
        let storage_key = self.storage_key(key);
        let mut records = self.load(key);
        records.push(serde_json::to_value(entry)?);

        let encoded = serde_json::to_string(&records)?;
        self.storage.set_item(&storage_key, &encoded)?;

        debug!("Stored local submission #{} under {storage_key}", records.len());
        Ok(records.len())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}
