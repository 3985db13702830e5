//! Keyed query cache.
//!
//! Each key carries a generation counter. A cached value is only served while
//! its generation tag matches the key's current generation, so invalidating a
//! key forces the next read to refetch. Invalidation also bumps a reactive
//! epoch that re-runs every [`use_query`] resource.

use std::collections::HashMap;
use std::future::Future;

use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared_types::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryKind {
    Asset,
    Activities,
    CustomFieldDefinitions,
}

/// Cache key: what is cached and for which entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    pub kind: QueryKind,
    pub id: String,
}

impl QueryKey {
    pub fn asset(id: &str) -> Self {
        Self {
            kind: QueryKind::Asset,
            id: id.to_string(),
        }
    }

    pub fn activities(asset_id: &str) -> Self {
        Self {
            kind: QueryKind::Activities,
            id: asset_id.to_string(),
        }
    }

    /// Definitions are global; the id is empty.
    pub fn custom_field_definitions() -> Self {
        Self {
            kind: QueryKind::CustomFieldDefinitions,
            id: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Entry {
    generation: u64,
    invalidations: u32,
    data: Option<(u64, Value)>,
}

/// Plain cache state, independent of the reactive runtime.
#[derive(Debug, Clone, Default)]
pub struct QueryStore {
    entries: HashMap<QueryKey, Entry>,
}

impl QueryStore {
    pub fn generation(&self, key: &QueryKey) -> u64 {
        self.entries.get(key).map(|e| e.generation).unwrap_or(0)
    }

    /// How many times `key` has been invalidated.
    pub fn invalidation_count(&self, key: &QueryKey) -> u32 {
        self.entries.get(key).map(|e| e.invalidations).unwrap_or(0)
    }

    pub fn invalidate(&mut self, key: &QueryKey) {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.generation += 1;
        entry.invalidations += 1;
    }

    /// Record a fetch result for the generation it was started under.
    /// Results for an outdated generation are dropped; returns whether the
    /// value was kept.
    pub fn store(&mut self, key: &QueryKey, generation: u64, value: Value) -> bool {
        let entry = self.entries.entry(key.clone()).or_default();
        if entry.generation != generation {
            return false;
        }
        entry.data = Some((generation, value));
        true
    }

    /// The cached value when it belongs to the current generation.
    pub fn fresh(&self, key: &QueryKey) -> Option<&Value> {
        let entry = self.entries.get(key)?;
        match &entry.data {
            Some((tag, value)) if *tag == entry.generation => Some(value),
            _ => None,
        }
    }
}

/// Reactive handle to the app-wide [`QueryStore`], provided as context.
#[derive(Clone, Copy)]
pub struct QueryCache {
    store: CopyValue<QueryStore>,
    epoch: Signal<u64>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            store: CopyValue::new(QueryStore::default()),
            epoch: Signal::new(0),
        }
    }

    /// Mark `key` stale and re-run the live queries.
    pub fn invalidate(&mut self, key: &QueryKey) {
        self.store.write().invalidate(key);
        tracing::debug!(?key, "Query invalidated");
        *self.epoch.write() += 1;
    }

    pub fn invalidation_count(&self, key: &QueryKey) -> u32 {
        self.store.read().invalidation_count(key)
    }

    fn snapshot<T: DeserializeOwned>(&self, key: &QueryKey) -> (u64, Option<T>) {
        let store = self.store.read();
        let cached = store
            .fresh(key)
            .and_then(|v| serde_json::from_value::<T>(v.clone()).ok());
        (store.generation(key), cached)
    }

    fn record<T: Serialize>(&mut self, key: &QueryKey, generation: u64, value: &T) {
        match serde_json::to_value(value) {
            Ok(json) => {
                self.store.write().store(key, generation, json);
            }
            Err(e) => tracing::warn!(?key, error = %e, "Query result not cacheable"),
        }
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the query cache for the component tree below.
pub fn use_query_cache_provider() -> QueryCache {
    use_context_provider(QueryCache::new)
}

/// Cached async query.
///
/// Serves the cached value while it is fresh, otherwise runs `fetch` and
/// caches a successful result. Errors are never cached. The key is fixed for
/// the lifetime of the calling component; key the component by entity id to
/// follow id changes.
pub fn use_query<T, F, Fut>(key: QueryKey, fetch: F) -> Resource<Result<T, AppError>>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let mut cache = use_context::<QueryCache>();
    use_resource(move || {
        let key = key.clone();
        // Subscribe to invalidations.
        let _epoch = *cache.epoch.read();
        let (generation, cached) = cache.snapshot::<T>(&key);
        // Futures are lazy: nothing is sent unless this is awaited.
        let request = fetch();
        async move {
            if let Some(value) = cached {
                return Ok(value);
            }
            let result = request.await;
            match &result {
                Ok(value) => cache.record(&key, generation, value),
                Err(e) => tracing::error!(?key, error = %e, "Query failed"),
            }
            result
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn stored_value_is_fresh_until_invalidated() {
        let mut store = QueryStore::default();
        let key = QueryKey::asset("a-1");
        assert!(store.store(&key, 0, json!({"id": "a-1"})));
        assert_eq!(store.fresh(&key), Some(&json!({"id": "a-1"})));

        store.invalidate(&key);
        assert_eq!(store.fresh(&key), None);
        assert_eq!(store.generation(&key), 1);
        assert_eq!(store.invalidation_count(&key), 1);
    }

    #[test]
    fn late_result_for_old_generation_is_dropped() {
        let mut store = QueryStore::default();
        let key = QueryKey::activities("a-1");
        store.invalidate(&key);
        assert!(!store.store(&key, 0, json!([])));
        assert_eq!(store.fresh(&key), None);
        assert!(store.store(&key, 1, json!([{"id": "x"}])));
        assert!(store.fresh(&key).is_some());
    }

    #[test]
    fn keys_are_independent() {
        let mut store = QueryStore::default();
        let asset = QueryKey::asset("a-1");
        let other = QueryKey::asset("a-2");
        store.store(&asset, 0, json!(1));
        store.store(&other, 0, json!(2));
        store.invalidate(&other);
        assert_eq!(store.fresh(&asset), Some(&json!(1)));
        assert_eq!(store.invalidation_count(&asset), 0);
        assert_ne!(QueryKey::asset("a-1"), QueryKey::activities("a-1"));
    }
}
