use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::modules::movie::domain::entities::{Movie, MovieDraft};
use crate::modules::review::domain::ReviewDraft;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;

/// Persistence port for the movie aggregate (a movie and its reviews)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Insert the movie and its reviews atomically; ids are assigned by the store
    async fn insert_with_reviews(
        &self,
        movie: MovieDraft,
        reviews: Vec<ReviewDraft>,
    ) -> AppResult<Movie>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Movie>>;

    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;

    /// Page through movies in ascending id order
    async fn find_all(&self, params: PaginationParams) -> AppResult<PaginatedResult<Movie>>;

    /// Exact genre match, ascending id order
    async fn find_by_genre(&self, genre: &str) -> AppResult<Vec<Movie>>;

    /// Movies of `genre` with at least one review, best average rating first.
    /// Ties are broken by ascending id.
    async fn find_top_by_genre_order_by_avg_rating_desc(&self, genre: &str)
        -> AppResult<Vec<Movie>>;

    /// Overwrite scalar fields and replace the whole review collection in one
    /// transaction. Reviews attached by any earlier write are removed too.
    async fn update_with_reviews(
        &self,
        id: i64,
        movie: MovieDraft,
        reviews: Vec<ReviewDraft>,
    ) -> AppResult<Movie>;

    /// Delete the movie and every review it owns
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}
