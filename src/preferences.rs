//! Preference Store
//!
//! The two "Litmus" flags, persisted as JSON booleans in key-value storage.
//! Missing or malformed values fall back to `true`.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::StorageConfig;
use crate::error::{BlogError, Result};

/// Durable string key-value storage
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Browser `window.localStorage`
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| BlogError::Storage("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| BlogError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| BlogError::Storage("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| BlogError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| BlogError::Storage(format!("{:?}", e)))
    }
}

/// In-memory storage; used when localStorage is unavailable
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Persisted display toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceFlags {
    /// "Litmus": color titles from the palette
    pub color_mode_enabled: bool,
    /// "Litmus+": rotate the palette over time (needs color mode)
    pub color_cycle_enabled: bool,
}

impl Default for PreferenceFlags {
    fn default() -> Self {
        Self {
            color_mode_enabled: true,
            color_cycle_enabled: true,
        }
    }
}

impl PreferenceFlags {
    /// Whether the title timers should be running
    pub fn cycling_active(&self) -> bool {
        self.color_mode_enabled && self.color_cycle_enabled
    }

    /// Read both flags; each is independent and defaults to `true`
    pub fn load(storage: &dyn KeyValueStorage, keys: &StorageConfig) -> Self {
        Self {
            color_mode_enabled: load_flag(storage, &keys.color_mode_key),
            color_cycle_enabled: load_flag(storage, &keys.color_cycle_key),
        }
    }

    pub fn save(&self, storage: &dyn KeyValueStorage, keys: &StorageConfig) -> Result<()> {
        storage.set(&keys.color_mode_key, &encode_flag(self.color_mode_enabled))?;
        storage.set(&keys.color_cycle_key, &encode_flag(self.color_cycle_enabled))?;
        Ok(())
    }
}

/// Decode a stored flag. `None` when absent; error when present but not a JSON boolean.
pub fn decode_flag(key: &str, raw: Option<&str>) -> Result<Option<bool>> {
    match raw {
        None => Ok(None),
        Some(raw) => serde_json::from_str::<bool>(raw).map(Some).map_err(|_| BlogError::Preference {
            key: key.to_string(),
            raw: raw.to_string(),
        }),
    }
}

pub fn encode_flag(value: bool) -> String {
    // JSON encoding, same as existing stored preferences
    if value { "true" } else { "false" }.to_string()
}

fn load_flag(storage: &dyn KeyValueStorage, key: &str) -> bool {
    let raw = match storage.get(key) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("[PREFS] {}", e);
            None
        }
    };
    match decode_flag(key, raw.as_deref()) {
        Ok(value) => value.unwrap_or(true),
        Err(e) => {
            log::warn!("[PREFS] {}; using default", e);
            true
        }
    }
}
