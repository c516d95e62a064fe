use std::sync::Arc;

use super::dto::{ReviewCreateRequest, ReviewResponse, ReviewUpdateRequest};
use super::mapper::ReviewMapper;
use crate::modules::movie::domain::MovieRepository;
use crate::modules::review::domain::ReviewRepository;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::cache::{self, CacheRegion, CacheRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::TimedOperation;
use crate::{log_debug, log_info};

pub struct ReviewService {
    review_repo: Arc<dyn ReviewRepository>,
    movie_repo: Arc<dyn MovieRepository>,
    cache: Arc<dyn CacheRepository>,
}

impl ReviewService {
    pub fn new(
        review_repo: Arc<dyn ReviewRepository>,
        movie_repo: Arc<dyn MovieRepository>,
        cache: Arc<dyn CacheRepository>,
    ) -> Self {
        Self {
            review_repo,
            movie_repo,
            cache,
        }
    }

    pub async fn create_review(&self, request: ReviewCreateRequest) -> AppResult<ReviewResponse> {
        let timer = TimedOperation::new("create_review");

        if !self.movie_repo.exists_by_id(request.movie_id).await? {
            return Err(AppError::movie_not_found(request.movie_id));
        }

        let draft = ReviewMapper::create_to_draft(&request);
        let saved = self.review_repo.save(request.movie_id, draft).await?;
        cache::invalidate_all(self.cache.as_ref(), "create_review").await;

        log_info!("Created review {} for movie {}", saved.id, saved.movie_id);
        timer.finish();
        Ok(saved.into())
    }

    pub async fn get_all_reviews(
        &self,
        params: PaginationParams,
    ) -> AppResult<PaginatedResult<ReviewResponse>> {
        let repo = Arc::clone(&self.review_repo);

        cache::read_through(
            self.cache.as_ref(),
            CacheRegion::Reviews,
            &params.cache_key(),
            || async move {
                log_debug!(
                    "Loading review page {} (size {}) from store",
                    params.page,
                    params.page_size
                );
                let page = repo.find_all(params).await?;
                Ok(page.map(ReviewResponse::from))
            },
        )
        .await
    }

    pub async fn get_review_by_id(&self, id: i64) -> AppResult<ReviewResponse> {
        let repo = Arc::clone(&self.review_repo);

        cache::read_through(
            self.cache.as_ref(),
            CacheRegion::Reviews,
            &format!("id:{}", id),
            || async move {
                repo.find_by_id(id)
                    .await?
                    .map(ReviewResponse::from)
                    .ok_or_else(|| AppError::review_not_found(id))
            },
        )
        .await
    }

    pub async fn update_review(
        &self,
        id: i64,
        request: ReviewUpdateRequest,
    ) -> AppResult<ReviewResponse> {
        let existing = self
            .review_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::review_not_found(id))?;

        let movie_id = match request.movie_id {
            Some(movie_id) if movie_id != existing.movie_id => {
                if !self.movie_repo.exists_by_id(movie_id).await? {
                    return Err(AppError::movie_not_found(movie_id));
                }
                log_debug!(
                    "Moving review {} from movie {} to movie {}",
                    id,
                    existing.movie_id,
                    movie_id
                );
                movie_id
            }
            _ => existing.movie_id,
        };

        let draft = ReviewMapper::update_to_draft(&request);
        let updated = self.review_repo.update(id, movie_id, draft).await?;
        cache::invalidate_all(self.cache.as_ref(), "update_review").await;

        Ok(updated.into())
    }

    pub async fn delete_review(&self, id: i64) -> AppResult<()> {
        if !self.review_repo.exists_by_id(id).await? {
            return Err(AppError::review_not_found(id));
        }

        self.review_repo.delete_by_id(id).await?;
        cache::invalidate_all(self.cache.as_ref(), "delete_review").await;

        log_info!("Deleted review {}", id);
        Ok(())
    }
}
