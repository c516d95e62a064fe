pub mod modules;
pub mod routes;
mod schema;
pub mod shared;

use modules::{
    movie::{MovieRepository, MovieRepositoryImpl, MovieService},
    review::{ReviewRepository, ReviewRepositoryImpl, ReviewService},
};
use routes::{build_router, AppState};
use shared::{
    cache::{CacheRepository, MemoryCache},
    infrastructure::BasicCredentials,
    AppConfig, Database,
};
use std::sync::Arc;

/// Wire repositories, the shared cache and services into router state
pub fn build_state(
    movie_repo: Arc<dyn MovieRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    cache: Arc<dyn CacheRepository>,
    credentials: BasicCredentials,
) -> AppState {
    let movie_service = Arc::new(MovieService::new(
        Arc::clone(&movie_repo),
        Arc::clone(&cache),
    ));
    let review_service = Arc::new(ReviewService::new(
        review_repo,
        Arc::clone(&movie_repo),
        Arc::clone(&cache),
    ));

    AppState {
        movie_service,
        review_service,
        credentials: Arc::new(credentials),
        cache,
    }
}

pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    shared::utils::init_logger();

    let config = AppConfig::from_env()?;
    log::info!("Starting movie-reviews with {:?}", config.server);

    let database = Arc::new(Database::new(&config.database)?);
    database.run_migrations()?;

    let movie_repo: Arc<dyn MovieRepository> =
        Arc::new(MovieRepositoryImpl::new(Arc::clone(&database)));
    let review_repo: Arc<dyn ReviewRepository> =
        Arc::new(ReviewRepositoryImpl::new(Arc::clone(&database)));
    let cache: Arc<dyn CacheRepository> = Arc::new(MemoryCache::new());

    let state = build_state(movie_repo, review_repo, cache, config.credentials.clone());
    let app = build_router(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}
