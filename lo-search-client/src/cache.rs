use crate::error::Error;
use crate::filter::{FilterCategory, FilterOption};
use crate::CatalogClient;
use dashmap::DashMap;
use std::sync::Arc;

/// Host-owned key/value storage. Values are opaque strings; eviction policy
/// and concurrency discipline belong entirely to the implementation, and
/// `get`/`set` are treated as independently atomic.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
}

pub type SharedStore = Arc<dyn KeyValueStore>;

/// Process-local store for tests, examples, and hosts without a cache of
/// their own. Never evicts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Lazily fills filter lists from the API through a host store, one entry
/// per category. Stored values are the JSON form of the list exactly as
/// fetched: placeholder relabeling happens outside, on every read. Search
/// results never pass through here.
#[derive(Clone)]
pub struct FilterListCache {
    store: SharedStore,
}

impl FilterListCache {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Return the stored list for a category, fetching and storing it on
    /// the first lookup.
    pub async fn get_or_fetch(
        &self,
        client: &CatalogClient,
        category: FilterCategory,
    ) -> Result<Vec<FilterOption>, Error> {
        let key = category.cache_key();
        if let Some(raw) = self.store.get(key) {
            log::debug!("filter cache hit for {key}");
            return Ok(serde_json::from_str(&raw)?);
        }

        log::debug!("filter cache miss for {key}");
        let options = client.fetch_filter(category).await?;
        self.store.set(key, serde_json::to_string(&options)?);
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("type"), None);
        store.set("type", "[]".to_string());
        assert_eq!(store.get("type").as_deref(), Some("[]"));
        store.set("type", "[1]".to_string());
        assert_eq!(store.get("type").as_deref(), Some("[1]"));
    }
}
