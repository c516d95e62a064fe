use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::modules::review::domain::entities::{Review, ReviewDraft};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;

/// Persistence port for standalone review operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Store a new review attached to `movie_id`; the store assigns the id
    async fn save(&self, movie_id: i64, review: ReviewDraft) -> AppResult<Review>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Review>>;

    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;

    /// Page through all reviews in ascending id order
    async fn find_all(&self, params: PaginationParams) -> AppResult<PaginatedResult<Review>>;

    /// Overwrite the scalar fields and the owning movie of an existing review
    async fn update(&self, id: i64, movie_id: i64, review: ReviewDraft) -> AppResult<Review>;

    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}
