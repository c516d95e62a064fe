use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tokio::task;

use crate::log_debug;
use crate::modules::review::domain::{Review, ReviewDraft, ReviewRepository};
use crate::modules::review::infrastructure::models::{
    NewReviewModel, ReviewChangeset, ReviewModel,
};
use crate::schema::review;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use crate::shared::Database;

pub struct ReviewRepositoryImpl {
    db: Arc<Database>,
}

impl ReviewRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    // The movie can be deleted between the service's existence check and this write
    fn missing_movie(movie_id: i64) -> impl FnOnce(DieselError) -> AppError {
        move |err| match err {
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                log_debug!("Movie {} vanished before the review write", movie_id);
                AppError::movie_not_found(movie_id)
            }
            other => AppError::from(other),
        }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn save(&self, movie_id: i64, draft: ReviewDraft) -> AppResult<Review> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<ReviewModel> {
            let mut conn = db.get_connection()?;
            let start = std::time::Instant::now();

            let saved = diesel::insert_into(review::table)
                .values(NewReviewModel::from_draft(movie_id, draft))
                .returning(ReviewModel::as_returning())
                .get_result(&mut conn)
                .map_err(Self::missing_movie(movie_id))?;

            LogContext::db_operation(
                "insert",
                "review",
                Some(start.elapsed().as_millis() as u64),
            );
            Ok(saved)
        })
        .await??;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Review>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<ReviewModel>> {
            let mut conn = db.get_connection()?;
            let m = review::table
                .find(id)
                .select(ReviewModel::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Review::from))
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let exists = diesel::select(diesel::dsl::exists(review::table.find(id)))
                .get_result::<bool>(&mut conn)?;
            Ok(exists)
        })
        .await?
    }

    async fn find_all(&self, params: PaginationParams) -> AppResult<PaginatedResult<Review>> {
        let db = Arc::clone(&self.db);

        let (models, total) = task::spawn_blocking(move || -> AppResult<(Vec<ReviewModel>, i64)> {
            let mut conn = db.get_connection()?;

            let total = review::table.count().get_result::<i64>(&mut conn)?;
            let models = review::table
                .select(ReviewModel::as_select())
                .order(review::id.asc())
                .offset(params.offset())
                .limit(params.limit())
                .load(&mut conn)?;

            log_debug!(
                "Loaded {} of {} reviews for page {}",
                models.len(),
                total,
                params.page
            );
            Ok((models, total))
        })
        .await??;

        let items = models.into_iter().map(Review::from).collect();
        Ok(PaginatedResult::new(items, total as u64, &params))
    }

    async fn update(&self, id: i64, movie_id: i64, draft: ReviewDraft) -> AppResult<Review> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<ReviewModel> {
            let mut conn = db.get_connection()?;
            diesel::update(review::table.find(id))
                .set(ReviewChangeset::from_draft(movie_id, draft))
                .returning(ReviewModel::as_returning())
                .get_result(&mut conn)
                .optional()
                .map_err(Self::missing_movie(movie_id))?
                .ok_or_else(|| AppError::review_not_found(id))
        })
        .await??;

        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let deleted = diesel::delete(review::table.find(id)).execute(&mut conn)?;
            if deleted == 0 {
                return Err(AppError::review_not_found(id));
            }
            LogContext::db_operation("delete", "review", None);
            Ok(())
        })
        .await?
    }
}
