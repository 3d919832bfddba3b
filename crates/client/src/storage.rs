//! Durable client storage.
//!
//! A small key-value seam in the style of browser `localStorage`: string
//! keys, string values, synchronous writes. The cart ledger and the
//! cookie-consent record both persist through it. Storage failures are
//! logged and swallowed - losing a write must never take the session down.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

/// Storage key for the serialized cart mapping.
pub const CART_KEY: &str = "tannery_cart";
/// Storage key for the cookie-consent decision.
pub const CONSENT_KEY: &str = "tannery_cookie_consent";

/// Durable string key-value storage.
pub trait KeyValueStore {
    /// Read the value for `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    /// Implementations log failures instead of returning them.
    fn set(&self, key: &str, value: &str);

    /// Remove `key` if present.
    fn remove(&self, key: &str);
}

/// File-backed store: one file per key under a directory.
///
/// The closest native analog to per-origin browser storage. Keys are used
/// as file names directly, so they must stay path-safe (ours are fixed
/// constants).
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `std::io::Error` if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::write(self.path_for(key), value) {
            tracing::warn!(key, error = %e, "failed to persist storage key");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = std::fs::remove_file(self.path_for(key)) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(key, error = %e, "failed to remove storage key");
            }
        }
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one key.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.write() {
            values.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert!(store.get("k").is_none());
        store.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k");
        assert!(store.get("k").is_none());
    }

    #[test]
    fn file_store_round_trips() {
        let dir = std::env::temp_dir().join(format!("tannery-store-{}", std::process::id()));
        let store = FileStore::new(&dir).expect("temp dir");
        store.set(CART_KEY, r#"{"1":2}"#);
        assert_eq!(store.get(CART_KEY).as_deref(), Some(r#"{"1":2}"#));
        store.remove(CART_KEY);
        assert!(store.get(CART_KEY).is_none());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn file_store_remove_missing_key_is_quiet() {
        let dir = std::env::temp_dir().join(format!("tannery-store-rm-{}", std::process::id()));
        let store = FileStore::new(&dir).expect("temp dir");
        store.remove("never_written");
        let _ = std::fs::remove_dir_all(&dir);
    }
}
