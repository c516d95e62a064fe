//! Read-through caching shared by the movie and review services.
//!
//! Reads go through [`read_through`]; writes call [`invalidate_all`] once the
//! store has accepted them, evicting every region regardless of which entity
//! changed. A failed write leaves the cache untouched.

pub mod cache_repository;
pub mod memory_cache;

pub use cache_repository::{CacheRegion, CacheRepository, CacheStats};
pub use memory_cache::MemoryCache;

use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;

use crate::log_warn;
use crate::shared::errors::AppResult;
use crate::shared::utils::LogContext;

/// Serve `key` from `region` if cached, otherwise run `load` and cache its result.
///
/// Only successful loads are cached. An entry that no longer deserializes is
/// treated as a miss and overwritten.
pub async fn read_through<T, F, Fut>(
    cache: &dyn CacheRepository,
    region: CacheRegion,
    key: &str,
    load: F,
) -> AppResult<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    if let Some(value) = cache.get(region, key).await {
        match serde_json::from_value::<T>(value) {
            Ok(hit) => return Ok(hit),
            Err(e) => log_warn!(
                "Discarding unreadable cache entry {}:{}: {}",
                region.name(),
                key,
                e
            ),
        }
    }

    let loaded = load().await?;
    cache.put(region, key, serde_json::to_value(&loaded)?).await;
    Ok(loaded)
}

/// Evict every cache region. Called after each successful write.
pub async fn invalidate_all(cache: &dyn CacheRepository, operation: &str) {
    for region in CacheRegion::ALL {
        cache.evict_all(region).await;
    }
    LogContext::cache_invalidation(operation, CacheRegion::ALL.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn miss_loads_and_populates() {
        let cache = MemoryCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value: Vec<i64> = read_through(&cache, CacheRegion::Movies, "page:0:10", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(vec![1, 2, 3])
            })
            .await
            .unwrap();
            assert_eq!(value, vec![1, 2, 3]);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_load_is_not_cached() {
        let cache = MemoryCache::new();

        let result: AppResult<String> = read_through(&cache, CacheRegion::Reviews, "id:4", || async {
            Err(AppError::review_not_found(4))
        })
        .await;

        assert!(result.unwrap_err().is_not_found());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn unreadable_entry_is_reloaded() {
        let cache = MemoryCache::new();
        cache
            .put(CacheRegion::Movies, "id:1", json!("not a number"))
            .await;

        let value: i64 = read_through(&cache, CacheRegion::Movies, "id:1", || async { Ok(42) })
            .await
            .unwrap();

        assert_eq!(value, 42);
        assert_eq!(cache.get(CacheRegion::Movies, "id:1").await, Some(json!(42)));
    }

    #[tokio::test]
    async fn invalidate_all_empties_every_region() {
        let cache = MemoryCache::new();
        for region in CacheRegion::ALL {
            cache.put(region, "k", json!(true)).await;
        }

        invalidate_all(&cache, "test").await;

        assert!(cache.is_empty());
    }
}
