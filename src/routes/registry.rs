use axum::{
    extract::{FromRef, State},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::auth::require_basic_auth;
use crate::modules::{movie, review};
use crate::shared::cache::CacheRepository;
use crate::shared::infrastructure::BasicCredentials;

/// Everything the handlers can extract with `State<_>`
#[derive(Clone, FromRef)]
pub struct AppState {
    pub movie_service: Arc<movie::MovieService>,
    pub review_service: Arc<review::ReviewService>,
    pub credentials: Arc<BasicCredentials>,
    pub cache: Arc<dyn CacheRepository>,
}

/// Single source of truth for every HTTP route
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Movie routes
        .route(
            "/movies",
            get(movie::handlers::get_all_movies).post(movie::handlers::create_movie),
        )
        .route(
            "/movies/by-genre",
            get(movie::handlers::find_movies_by_genre),
        )
        .route(
            "/movies/top-by-genre",
            get(movie::handlers::find_top_rated_movies_by_genre),
        )
        .route(
            "/movies/{id}",
            get(movie::handlers::get_movie)
                .put(movie::handlers::update_movie)
                .delete(movie::handlers::delete_movie),
        )
        // Review routes
        .route(
            "/reviews",
            get(review::handlers::get_all_reviews).post(review::handlers::create_review),
        )
        .route(
            "/reviews/{id}",
            get(review::handlers::get_review)
                .put(review::handlers::update_review)
                .delete(review::handlers::delete_review),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_basic_auth,
        ));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness plus read-through cache counters
async fn health(State(cache): State<Arc<dyn CacheRepository>>) -> Json<Value> {
    let stats = cache.get_cache_stats().await;
    Json(json!({
        "status": "ok",
        "cache": {
            "entries": stats.entries,
            "hits": stats.hits,
            "misses": stats.misses,
            "evictions": stats.evictions,
            "hitRate": stats.hit_rate(),
        }
    }))
}
