//! Application settings
//!
//! An explicit settings object backed by an injected key-value store.
//! Values are read once at load and written through on change, mirroring
//! the store format the browser original used (string values only).

use crate::store::{keys, KvStore};

/// Default cap on returned results
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Runtime settings, write-through to the backing store
pub struct Settings {
    store: Box<dyn KvStore>,
    api_key: Option<String>,
    selected_model: Option<String>,
    cache_enabled: bool,
    max_results: usize,
}

impl Settings {
    /// Load settings from a store, applying defaults for absent keys
    pub fn load(store: Box<dyn KvStore>) -> Self {
        let api_key = store.get(keys::API_KEY).filter(|k| !k.is_empty());
        let selected_model = store.get(keys::SELECTED_MODEL).filter(|m| !m.is_empty());
        let cache_enabled = store
            .get(keys::CACHE_ENABLED)
            .map(|v| v == "true")
            .unwrap_or(true);
        let max_results = store
            .get(keys::MAX_RESULTS)
            .and_then(|v| v.parse().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_MAX_RESULTS);

        Self {
            store,
            api_key,
            selected_model,
            cache_enabled,
            max_results,
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) {
        let key = key.into();
        self.store.set(keys::API_KEY, &key);
        self.api_key = Some(key).filter(|k| !k.is_empty());
    }

    pub fn selected_model(&self) -> Option<&str> {
        self.selected_model.as_deref()
    }

    pub fn set_selected_model(&mut self, model: impl Into<String>) {
        let model = model.into();
        self.store.set(keys::SELECTED_MODEL, &model);
        self.selected_model = Some(model).filter(|m| !m.is_empty());
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled
    }

    pub fn set_cache_enabled(&mut self, enabled: bool) {
        self.store
            .set(keys::CACHE_ENABLED, if enabled { "true" } else { "false" });
        self.cache_enabled = enabled;
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn set_max_results(&mut self, max: usize) {
        let max = max.max(1);
        self.store.set(keys::MAX_RESULTS, &max.to_string());
        self.max_results = max;
    }

    /// Raw access to the backing store, for saved-word persistence
    pub fn store(&self) -> &dyn KvStore {
        self.store.as_ref()
    }

    /// Mutable access to the backing store
    pub fn store_mut(&mut self) -> &mut dyn KvStore {
        self.store.as_mut()
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("selected_model", &self.selected_model)
            .field("cache_enabled", &self.cache_enabled)
            .field("max_results", &self.max_results)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_defaults_for_empty_store() {
        let settings = Settings::load(Box::new(MemoryStore::new()));
        assert_eq!(settings.api_key(), None);
        assert_eq!(settings.selected_model(), None);
        assert!(settings.cache_enabled());
        assert_eq!(settings.max_results(), DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_settings_write_through() {
        let mut store = MemoryStore::new();
        store.set(keys::CACHE_ENABLED, "false");

        let mut settings = Settings::load(Box::new(store));
        assert!(!settings.cache_enabled());

        settings.set_api_key("sk-test");
        settings.set_selected_model("openai/gpt-4o-mini");
        settings.set_max_results(3);

        assert_eq!(settings.store().get(keys::API_KEY).as_deref(), Some("sk-test"));
        assert_eq!(
            settings.store().get(keys::MAX_RESULTS).as_deref(),
            Some("3")
        );
        assert_eq!(settings.max_results(), 3);
    }

    #[test]
    fn test_empty_key_reads_as_absent() {
        let mut store = MemoryStore::new();
        store.set(keys::API_KEY, "");
        let settings = Settings::load(Box::new(store));
        assert_eq!(settings.api_key(), None);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let mut settings = Settings::load(Box::new(MemoryStore::new()));
        settings.set_api_key("sk-secret");
        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("sk-secret"));
    }
}
