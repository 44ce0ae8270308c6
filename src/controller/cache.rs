use ahash::RandomState;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::{OnceCell, RwLock};
use tracing::debug;

use crate::clock::Clock;

pub const LOOKUP_CACHE_DURATION: Duration = Duration::hours(1);

struct CacheEntry<V> {
    value: Arc<OnceCell<V>>,
    cached_time: DateTime<Utc>,
}

/// Memoizes async lookups by key for a fixed time-to-live.
///
/// Expiry is checked on read; a stale entry is replaced by the next caller.
/// Callers that miss on the same key while a fetch is running wait on that
/// fetch instead of starting their own.
pub struct LookupCache<K, V> {
    name: &'static str,
    entries: RwLock<HashMap<K, CacheEntry<V>, RandomState>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<K, V> LookupCache<K, V>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
    V: Clone,
{
    #[must_use]
    pub fn new(name: &'static str, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            name,
            entries: RwLock::new(HashMap::with_hasher(RandomState::new())),
            ttl,
            clock,
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn get_or_fetch<F, Fut>(&self, key: K, fetch: F) -> V
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V>,
    {
        let cell = {
            let mut map = self.entries.write().await;
            let now = self.clock.now();
            match map.get(&key) {
                Some(entry) if now - entry.cached_time < self.ttl => {
                    debug!(cache = self.name, ?key, "cache hit");
                    entry.value.clone()
                }
                _ => {
                    debug!(cache = self.name, ?key, "cache miss");
                    let value = Arc::new(OnceCell::new());
                    map.insert(
                        key,
                        CacheEntry {
                            value: value.clone(),
                            cached_time: now,
                        },
                    );
                    value
                }
            }
        };
        cell.get_or_init(fetch).await.clone()
    }

    /// Fresh value for `key`, if one has finished computing.
    pub async fn peek(&self, key: &K) -> Option<V> {
        let map = self.entries.read().await;
        let entry = map.get(key)?;
        if self.clock.now() - entry.cached_time >= self.ttl {
            return None;
        }
        entry.value.get().cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
