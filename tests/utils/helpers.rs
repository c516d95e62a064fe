/// Test helper functions and service builders
use super::in_memory::InMemoryStore;
use movie_reviews::modules::{
    movie::{MovieRepository, MovieRepositoryImpl, MovieService},
    review::{ReviewRepository, ReviewRepositoryImpl, ReviewService},
};
use movie_reviews::routes::AppState;
use movie_reviews::shared::cache::{CacheRepository, MemoryCache};
use movie_reviews::shared::infrastructure::BasicCredentials;
use movie_reviews::shared::Database;
use std::sync::Arc;

pub const TEST_USERNAME: &str = "critic";
pub const TEST_PASSWORD: &str = "popcorn";

pub struct TestServices {
    pub movie_service: Arc<MovieService>,
    pub review_service: Arc<ReviewService>,
    pub cache: Arc<MemoryCache>,
    pub store: InMemoryStore,
}

/// Services backed by a fresh in-memory store and an empty cache
pub fn build_test_services() -> TestServices {
    let store = InMemoryStore::new();
    let cache = Arc::new(MemoryCache::new());

    let movie_repo: Arc<dyn MovieRepository> = Arc::new(store.clone());
    let review_repo: Arc<dyn ReviewRepository> = Arc::new(store.clone());
    let cache_repo: Arc<dyn CacheRepository> = cache.clone();

    TestServices {
        movie_service: Arc::new(MovieService::new(
            Arc::clone(&movie_repo),
            Arc::clone(&cache_repo),
        )),
        review_service: Arc::new(ReviewService::new(review_repo, movie_repo, cache_repo)),
        cache,
        store,
    }
}

/// Router state over the in-memory store with the test credentials
pub fn build_test_state() -> (AppState, InMemoryStore) {
    let store = InMemoryStore::new();
    let state = movie_reviews::build_state(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(MemoryCache::new()),
        BasicCredentials {
            username: TEST_USERNAME.to_string(),
            password: TEST_PASSWORD.to_string(),
        },
    );
    (state, store)
}

/// Services backed by the Diesel repositories on the given database
pub fn build_db_services(database: Arc<Database>) -> (Arc<MovieService>, Arc<ReviewService>) {
    let movie_repo: Arc<dyn MovieRepository> =
        Arc::new(MovieRepositoryImpl::new(Arc::clone(&database)));
    let review_repo: Arc<dyn ReviewRepository> =
        Arc::new(ReviewRepositoryImpl::new(Arc::clone(&database)));
    let cache: Arc<dyn CacheRepository> = Arc::new(MemoryCache::new());

    (
        Arc::new(MovieService::new(Arc::clone(&movie_repo), Arc::clone(&cache))),
        Arc::new(ReviewService::new(review_repo, movie_repo, cache)),
    )
}
