use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::Text;
use tokio::task;

use crate::modules::movie::domain::{Movie, MovieDraft, MovieRepository, ReviewReplacement};
use crate::modules::movie::infrastructure::models::{MovieChangeset, MovieModel, NewMovieModel};
use crate::modules::review::domain::{Review, ReviewDraft};
use crate::modules::review::infrastructure::models::{NewReviewModel, ReviewModel};
use crate::schema::{movie, review};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use crate::shared::Database;
use crate::{log_debug, log_warn};

const TOP_RATED_BY_GENRE_SQL: &str = "\
    SELECT m.id, m.title, m.release_year, m.genre, m.director \
    FROM movie m \
    JOIN review r ON r.movie_id = m.id \
    WHERE m.genre = $1 \
    GROUP BY m.id, m.title, m.release_year, m.genre, m.director \
    ORDER BY AVG(r.rating) DESC, m.id ASC";

pub struct MovieRepositoryImpl {
    db: Arc<Database>,
}

impl MovieRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    // Helper: attach each movie's reviews with a single batched query
    fn load_with_reviews(conn: &mut PgConnection, models: Vec<MovieModel>) -> AppResult<Vec<Movie>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let reviews = ReviewModel::belonging_to(&models)
            .select(ReviewModel::as_select())
            .order(review::id.asc())
            .load::<ReviewModel>(conn)?
            .grouped_by(&models);

        Ok(models
            .into_iter()
            .zip(reviews)
            .map(|(model, reviews)| {
                model.into_entity(reviews.into_iter().map(Review::from).collect())
            })
            .collect())
    }

    fn insert_reviews(
        conn: &mut PgConnection,
        movie_id: i64,
        drafts: Vec<ReviewDraft>,
    ) -> AppResult<usize> {
        if drafts.is_empty() {
            return Ok(0);
        }

        let rows: Vec<NewReviewModel> = drafts
            .into_iter()
            .map(|draft| NewReviewModel::from_draft(movie_id, draft))
            .collect();

        Ok(diesel::insert_into(review::table)
            .values(&rows)
            .execute(conn)?)
    }
}

#[async_trait]
impl MovieRepository for MovieRepositoryImpl {
    async fn insert_with_reviews(
        &self,
        draft: MovieDraft,
        reviews: Vec<ReviewDraft>,
    ) -> AppResult<Movie> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Movie> {
            let mut conn = db.get_connection()?;

            conn.transaction::<Movie, AppError, _>(|conn| {
                log_debug!("Starting database transaction for movie insert");
                let transaction_start = std::time::Instant::now();

                let saved = diesel::insert_into(movie::table)
                    .values(NewMovieModel::from(draft))
                    .returning(MovieModel::as_returning())
                    .get_result(conn)?;

                let inserted = Self::insert_reviews(conn, saved.id, reviews)?;
                log_debug!("Inserted {} review(s) for movie {}", inserted, saved.id);

                let movie = Self::load_with_reviews(conn, vec![saved])?
                    .pop()
                    .ok_or_else(|| {
                        AppError::InternalError("Inserted movie vanished in transaction".to_string())
                    })?;

                LogContext::db_operation(
                    "insert",
                    "movie",
                    Some(transaction_start.elapsed().as_millis() as u64),
                );
                Ok(movie)
            })
        })
        .await?
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Movie>> {
            let mut conn = db.get_connection()?;
            let model = movie::table
                .find(id)
                .select(MovieModel::as_select())
                .first(&mut conn)
                .optional()?;

            match model {
                Some(m) => Ok(Self::load_with_reviews(&mut conn, vec![m])?.pop()),
                None => Ok(None),
            }
        })
        .await?
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let exists = diesel::select(diesel::dsl::exists(movie::table.find(id)))
                .get_result::<bool>(&mut conn)?;
            Ok(exists)
        })
        .await?
    }

    async fn find_all(&self, params: PaginationParams) -> AppResult<PaginatedResult<Movie>> {
        let db = Arc::clone(&self.db);

        let (movies, total) = task::spawn_blocking(move || -> AppResult<(Vec<Movie>, i64)> {
            let mut conn = db.get_connection()?;

            let total = movie::table.count().get_result::<i64>(&mut conn)?;
            let models = movie::table
                .select(MovieModel::as_select())
                .order(movie::id.asc())
                .offset(params.offset())
                .limit(params.limit())
                .load(&mut conn)?;

            Ok((Self::load_with_reviews(&mut conn, models)?, total))
        })
        .await??;

        Ok(PaginatedResult::new(movies, total as u64, &params))
    }

    async fn find_by_genre(&self, genre: &str) -> AppResult<Vec<Movie>> {
        let db = Arc::clone(&self.db);
        let genre = genre.to_string();

        task::spawn_blocking(move || -> AppResult<Vec<Movie>> {
            let mut conn = db.get_connection()?;
            let models = movie::table
                .filter(movie::genre.eq(genre.as_str()))
                .select(MovieModel::as_select())
                .order(movie::id.asc())
                .load(&mut conn)?;

            log_debug!("Found {} movie(s) in genre '{}'", models.len(), genre);
            Self::load_with_reviews(&mut conn, models)
        })
        .await?
    }

    async fn find_top_by_genre_order_by_avg_rating_desc(
        &self,
        genre: &str,
    ) -> AppResult<Vec<Movie>> {
        let db = Arc::clone(&self.db);
        let genre = genre.to_string();

        task::spawn_blocking(move || -> AppResult<Vec<Movie>> {
            let mut conn = db.get_connection()?;
            let start = std::time::Instant::now();

            let models = diesel::sql_query(TOP_RATED_BY_GENRE_SQL)
                .bind::<Text, _>(genre)
                .load::<MovieModel>(&mut conn)?;

            LogContext::db_operation(
                "top_rated_by_genre",
                "movie",
                Some(start.elapsed().as_millis() as u64),
            );
            Self::load_with_reviews(&mut conn, models)
        })
        .await?
    }

    async fn update_with_reviews(
        &self,
        id: i64,
        draft: MovieDraft,
        reviews: Vec<ReviewDraft>,
    ) -> AppResult<Movie> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Movie> {
            let mut conn = db.get_connection()?;

            conn.transaction::<Movie, AppError, _>(|conn| {
                // Row lock blocks concurrent review inserts until commit
                let current = movie::table
                    .find(id)
                    .select(MovieModel::as_select())
                    .for_update()
                    .first(conn)
                    .optional()?
                    .ok_or_else(|| AppError::movie_not_found(id))?;

                let existing: Vec<Review> = ReviewModel::belonging_to(&current)
                    .select(ReviewModel::as_select())
                    .load::<ReviewModel>(conn)?
                    .into_iter()
                    .map(Review::from)
                    .collect();
                let replacement = ReviewReplacement::replace(&existing, reviews);

                let updated = diesel::update(movie::table.find(id))
                    .set(MovieChangeset::from(draft))
                    .returning(MovieModel::as_returning())
                    .get_result(conn)?;

                let removed =
                    diesel::delete(review::table.filter(review::movie_id.eq(id))).execute(conn)?;
                if removed != replacement.removed_ids.len() {
                    log_warn!(
                        "Movie {}: expected to remove {} review(s), removed {}",
                        id,
                        replacement.removed_ids.len(),
                        removed
                    );
                }

                let added = Self::insert_reviews(conn, id, replacement.added)?;
                log_debug!("Movie {}: removed {} review(s), added {}", id, removed, added);

                Self::load_with_reviews(conn, vec![updated])?
                    .pop()
                    .ok_or_else(|| AppError::movie_not_found(id))
            })
        })
        .await?
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            conn.transaction::<(), AppError, _>(|conn| {
                let reviews_deleted =
                    diesel::delete(review::table.filter(review::movie_id.eq(id))).execute(conn)?;
                let movies_deleted = diesel::delete(movie::table.find(id)).execute(conn)?;

                if movies_deleted == 0 {
                    return Err(AppError::movie_not_found(id));
                }

                log_debug!(
                    "Deleted movie {} with {} review(s)",
                    id,
                    reviews_deleted
                );
                Ok(())
            })?;

            LogContext::db_operation("delete", "movie", None);
            Ok(())
        })
        .await?
    }
}
