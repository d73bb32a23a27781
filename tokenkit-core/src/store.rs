//! Cache-store interface consumed by the cache manager and telemetry helper.

use std::collections::HashMap;
use std::sync::Mutex;

/// Key-value store holding serialized cache entities and telemetry counters.
///
/// Implementations must provide at-least last-writer-wins semantics per
/// key. Callers needing stronger consistency serialize their own writes;
/// this layer does not lock.
pub trait CacheStore: Send + Sync {
    /// Returns the value stored under `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: String);
}

/// In-memory [`CacheStore`] for tests and embedders without a platform
/// backend.
#[derive(Debug, Default)]
pub struct InMemoryCacheStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryCacheStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for InMemoryCacheStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value);
        }
    }
}
