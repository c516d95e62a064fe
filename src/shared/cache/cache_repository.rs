use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Named cache regions. Every write evicts all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheRegion {
    /// Movie pages and single movies by id
    Movies,
    MoviesByGenre,
    TopRatedMovies,
    /// Review pages and single reviews by id
    Reviews,
}

impl CacheRegion {
    pub const ALL: [CacheRegion; 4] = [
        CacheRegion::Movies,
        CacheRegion::MoviesByGenre,
        CacheRegion::TopRatedMovies,
        CacheRegion::Reviews,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CacheRegion::Movies => "movies",
            CacheRegion::MoviesByGenre => "movies_by_genre",
            CacheRegion::TopRatedMovies => "top_rated_movies",
            CacheRegion::Reviews => "reviews",
        }
    }
}

/// Repository interface for the read-through cache
/// This abstracts the caching mechanism from the services
#[async_trait]
pub trait CacheRepository: Send + Sync {
    async fn get(&self, region: CacheRegion, key: &str) -> Option<serde_json::Value>;

    async fn put(&self, region: CacheRegion, key: &str, value: serde_json::Value);

    /// Drop every entry of one region
    async fn evict_all(&self, region: CacheRegion);

    async fn get_cache_stats(&self) -> CacheStats;
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}
