use std::sync::Arc;

use super::dto::{MovieRequest, MovieResponse};
use super::mapper::MovieMapper;
use crate::modules::movie::domain::MovieRepository;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::cache::{self, CacheRegion, CacheRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::TimedOperation;
use crate::{log_debug, log_info};

pub struct MovieService {
    movie_repo: Arc<dyn MovieRepository>,
    cache: Arc<dyn CacheRepository>,
}

impl MovieService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>, cache: Arc<dyn CacheRepository>) -> Self {
        Self { movie_repo, cache }
    }

    pub async fn create_movie_with_reviews(
        &self,
        request: MovieRequest,
    ) -> AppResult<MovieResponse> {
        let timer = TimedOperation::new("create_movie_with_reviews");

        let draft = MovieMapper::to_draft(&request);
        let reviews = MovieMapper::review_drafts(&request);
        let saved = self.movie_repo.insert_with_reviews(draft, reviews).await?;
        cache::invalidate_all(self.cache.as_ref(), "create_movie").await;

        log_info!(
            "Created movie {} '{}' with {} review(s)",
            saved.id,
            saved.title,
            saved.reviews.len()
        );
        timer.finish();
        Ok(saved.into())
    }

    pub async fn get_all_movies(
        &self,
        params: PaginationParams,
    ) -> AppResult<PaginatedResult<MovieResponse>> {
        let repo = Arc::clone(&self.movie_repo);

        cache::read_through(
            self.cache.as_ref(),
            CacheRegion::Movies,
            &params.cache_key(),
            || async move {
                log_debug!(
                    "Loading movie page {} (size {}) from store",
                    params.page,
                    params.page_size
                );
                let page = repo.find_all(params).await?;
                Ok(page.map(MovieResponse::from))
            },
        )
        .await
    }

    pub async fn get_movie_by_id(&self, id: i64) -> AppResult<MovieResponse> {
        let repo = Arc::clone(&self.movie_repo);

        cache::read_through(
            self.cache.as_ref(),
            CacheRegion::Movies,
            &format!("id:{}", id),
            || async move {
                repo.find_by_id(id)
                    .await?
                    .map(MovieResponse::from)
                    .ok_or_else(|| AppError::movie_not_found(id))
            },
        )
        .await
    }

    /// Overwrite the movie and replace its whole review collection
    pub async fn update_movie(&self, id: i64, request: MovieRequest) -> AppResult<MovieResponse> {
        let timer = TimedOperation::new("update_movie");

        let updated = self
            .movie_repo
            .update_with_reviews(
                id,
                MovieMapper::to_draft(&request),
                MovieMapper::review_drafts(&request),
            )
            .await?;
        cache::invalidate_all(self.cache.as_ref(), "update_movie").await;

        log_debug!("Movie {} now has {} review(s)", id, updated.reviews.len());
        timer.finish();
        Ok(updated.into())
    }

    /// Delete the movie and, with it, every review it owns
    pub async fn delete_movie(&self, id: i64) -> AppResult<()> {
        if !self.movie_repo.exists_by_id(id).await? {
            return Err(AppError::movie_not_found(id));
        }

        self.movie_repo.delete_by_id(id).await?;
        cache::invalidate_all(self.cache.as_ref(), "delete_movie").await;

        log_info!("Deleted movie {} and its reviews", id);
        Ok(())
    }

    pub async fn find_movies_by_genre(&self, genre: &str) -> AppResult<Vec<MovieResponse>> {
        let repo = Arc::clone(&self.movie_repo);
        let owned = genre.to_string();

        cache::read_through(
            self.cache.as_ref(),
            CacheRegion::MoviesByGenre,
            genre,
            || async move {
                let movies = repo.find_by_genre(&owned).await?;
                Ok(movies.into_iter().map(MovieResponse::from).collect())
            },
        )
        .await
    }

    pub async fn find_top_rated_movies_by_genre(
        &self,
        genre: &str,
    ) -> AppResult<Vec<MovieResponse>> {
        let repo = Arc::clone(&self.movie_repo);
        let owned = genre.to_string();

        cache::read_through(
            self.cache.as_ref(),
            CacheRegion::TopRatedMovies,
            genre,
            || async move {
                let movies = repo
                    .find_top_by_genre_order_by_avg_rating_desc(&owned)
                    .await?;
                Ok(movies.into_iter().map(MovieResponse::from).collect())
            },
        )
        .await
    }
}
