//! In-memory result cache
//!
//! Maps a fingerprint of normalized search parameters to a timestamped
//! result list. Entries expire lazily after a fixed TTL; there is no
//! background sweeper and no size bound, the map lives only for the
//! process lifetime.

use crate::query::SearchParams;
use crate::results::WordResult;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

/// Cache time-to-live: 24 hours
pub const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Fingerprint for a set of search parameters.
///
/// Semantically identical parameters (letter case, clue whitespace, blank
/// vs `?` slots) hash to the same key.
pub fn fingerprint(params: &SearchParams) -> String {
    let mut hasher = Sha256::new();
    hasher.update(params.canonical_string().as_bytes());
    format!("{:x}", hasher.finalize())
}

struct CacheEntry {
    timestamp: Instant,
    results: Vec<WordResult>,
}

/// TTL-expiring cache of search results
pub struct SearchCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
    enabled: Mutex<bool>,
}

impl SearchCache {
    /// Create a cache with the default TTL
    pub fn new(enabled: bool) -> Self {
        Self::with_ttl(enabled, CACHE_TTL)
    }

    /// Create a cache with a custom TTL
    pub fn with_ttl(enabled: bool, ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            enabled: Mutex::new(enabled),
        }
    }

    /// Look up cached results for the given parameters.
    ///
    /// Returns `None` when caching is disabled or the entry is missing or
    /// stale; a stale entry is evicted on the way out.
    pub fn lookup(&self, params: &SearchParams) -> Option<Vec<WordResult>> {
        self.lookup_at(params, Instant::now())
    }

    fn lookup_at(&self, params: &SearchParams, now: Instant) -> Option<Vec<WordResult>> {
        if !self.is_enabled() {
            return None;
        }

        let key = fingerprint(params);
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        match entries.get(&key) {
            Some(entry) if now.duration_since(entry.timestamp) < self.ttl => {
                debug!("Cache hit for {}", &key[..12]);
                Some(entry.results.clone())
            }
            Some(_) => {
                debug!("Evicting expired cache entry {}", &key[..12]);
                entries.remove(&key);
                None
            }
            None => None,
        }
    }

    /// Store results for the given parameters. No-op while disabled.
    pub fn store(&self, params: &SearchParams, results: &[WordResult]) {
        self.store_at(params, results, Instant::now());
    }

    fn store_at(&self, params: &SearchParams, results: &[WordResult], now: Instant) {
        if !self.is_enabled() {
            return;
        }

        let key = fingerprint(params);
        self.entries.lock().expect("cache lock poisoned").insert(
            key,
            CacheEntry {
                timestamp: now,
                results: results.to_vec(),
            },
        );
    }

    /// Drop all entries
    pub fn clear(&self) {
        self.entries.lock().expect("cache lock poisoned").clear();
    }

    /// Enable or disable caching. Disabling clears every entry so stale
    /// data is never served after the user opts out.
    pub fn set_enabled(&self, enabled: bool) {
        *self.enabled.lock().expect("cache lock poisoned") = enabled;
        if !enabled {
            self.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        *self.enabled.lock().expect("cache lock poisoned")
    }

    /// Number of live entries (stale ones included until touched)
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
