//! Key-value persistence port
//!
//! Settings and saved words are mirrored to a simple string key-value
//! store. The port is a trait so the pipeline can be tested against an
//! in-memory backend while the CLI persists to a JSON file in the user's
//! config directory.

use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Storage keys used by the application
pub mod keys {
    /// OpenRouter API key
    pub const API_KEY: &str = "openrouter_api_key";
    /// Selected model id
    pub const SELECTED_MODEL: &str = "openrouter_model";
    /// Cache enable flag, "true"/"false"
    pub const CACHE_ENABLED: &str = "cache_enabled";
    /// Result cap, decimal string
    pub const MAX_RESULTS: &str = "max_results";
    /// Saved words, JSON array of results
    pub const SAVED_WORDS: &str = "saved_words";
}

/// String key-value store
pub trait KvStore: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&mut self, key: &str, value: &str);

    /// Delete a value
    fn remove(&mut self, key: &str);
}

/// In-memory store, used by tests and as a no-persistence fallback
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// JSON-file-backed store.
///
/// The whole map is rewritten on every set; fine for a handful of keys.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open (or create) a store at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("Ignoring unreadable store at {}: {}", path.display(), e);
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Ok(Self { path, entries })
    }

    /// Open the store at the default per-user location
    pub fn open_default() -> Result<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("no config directory available"))?
            .join("wordspark");
        std::fs::create_dir_all(&dir)?;
        Self::open(dir.join("store.json"))
    }

    fn flush(&self) {
        match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    warn!("Failed to persist store to {}: {}", self.path.display(), e);
                }
            }
            Err(e) => warn!("Failed to serialize store: {}", e),
        }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(keys::API_KEY), None);

        store.set(keys::API_KEY, "sk-test");
        assert_eq!(store.get(keys::API_KEY), Some("sk-test".to_string()));

        store.remove(keys::API_KEY);
        assert_eq!(store.get(keys::API_KEY), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!("wordspark-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("store.json");

        {
            let mut store = FileStore::open(&path).unwrap();
            store.set(keys::MAX_RESULTS, "7");
        }
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(keys::MAX_RESULTS), Some("7".to_string()));

        std::fs::remove_dir_all(&dir).ok();
    }
}
