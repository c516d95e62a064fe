use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use super::cache_repository::{CacheRegion, CacheRepository, CacheStats};

/// Process-wide in-memory cache
///
/// Entries never expire on their own; they live until the next write evicts
/// their region. There is no per-key locking: a populate racing an eviction
/// can leave one stale entry behind until the following write.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<(CacheRegion, String), serde_json::Value>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries currently held for one region
    pub fn region_len(&self, region: CacheRegion) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.key().0 == region)
            .count()
    }
}

#[async_trait]
impl CacheRepository for MemoryCache {
    async fn get(&self, region: CacheRegion, key: &str) -> Option<serde_json::Value> {
        match self.entries.get(&(region, key.to_string())) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Cache hit for {}:{}", region.name(), key);
                Some(entry.value().clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!("Cache miss for {}:{}", region.name(), key);
                None
            }
        }
    }

    async fn put(&self, region: CacheRegion, key: &str, value: serde_json::Value) {
        self.entries.insert((region, key.to_string()), value);
    }

    async fn evict_all(&self, region: CacheRegion) {
        let before = self.entries.len();
        self.entries.retain(|(entry_region, _), _| *entry_region != region);
        let evicted = before.saturating_sub(self.entries.len());

        self.evictions.fetch_add(evicted as u64, Ordering::Relaxed);
        debug!("Evicted {} entries from {}", evicted, region.name());
    }

    async fn get_cache_stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}
