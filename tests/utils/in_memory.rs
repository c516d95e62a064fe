/// In-memory store implementing both repository ports
///
/// Mirrors the database semantics the services rely on: ascending ids,
/// cascade delete, exact genre match and average-rating ordering.
use async_trait::async_trait;
use movie_reviews::modules::{
    movie::{Movie, MovieDraft, MovieRepository, ReviewReplacement},
    review::{Review, ReviewDraft, ReviewRepository},
};
use movie_reviews::shared::application::{PaginatedResult, PaginationParams};
use movie_reviews::shared::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct MovieRow {
    id: i64,
    draft: MovieDraft,
}

#[derive(Default)]
struct State {
    movies: BTreeMap<i64, MovieRow>,
    reviews: BTreeMap<i64, Review>,
    next_movie_id: i64,
    next_review_id: i64,
}

impl State {
    fn assemble(&self, row: &MovieRow) -> Movie {
        let reviews = self
            .reviews
            .values()
            .filter(|r| r.movie_id == row.id)
            .cloned()
            .collect();
        row.draft.clone().into_movie(row.id, reviews)
    }

    fn insert_review(&mut self, movie_id: i64, draft: ReviewDraft) -> Review {
        self.next_review_id += 1;
        let review = draft.into_review(self.next_review_id, movie_id);
        self.reviews.insert(review.id, review.clone());
        review
    }
}

/// Shared handle; clones see the same data
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
    fail_writes: Arc<Mutex<bool>>,
    reads: Arc<AtomicUsize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with a database error
    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    /// Number of read calls that reached the store
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn review_count(&self) -> usize {
        self.state.lock().unwrap().reviews.len()
    }

    fn check_writable(&self) -> AppResult<()> {
        if *self.fail_writes.lock().unwrap() {
            return Err(AppError::DatabaseError("store unavailable".to_string()));
        }
        Ok(())
    }

    fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::SeqCst);
    }
}

fn paginate<T: Clone>(all: Vec<T>, params: &PaginationParams) -> PaginatedResult<T> {
    let total = all.len() as u64;
    let items = all
        .into_iter()
        .skip(params.offset() as usize)
        .take(params.limit() as usize)
        .collect();
    PaginatedResult::new(items, total, params)
}

#[async_trait]
impl MovieRepository for InMemoryStore {
    async fn insert_with_reviews(
        &self,
        movie: MovieDraft,
        reviews: Vec<ReviewDraft>,
    ) -> AppResult<Movie> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();

        state.next_movie_id += 1;
        let row = MovieRow {
            id: state.next_movie_id,
            draft: movie,
        };
        state.movies.insert(row.id, row.clone());
        for draft in reviews {
            state.insert_review(row.id, draft);
        }

        Ok(state.assemble(&row))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        self.record_read();
        let state = self.state.lock().unwrap();
        Ok(state.movies.get(&id).map(|row| state.assemble(row)))
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.state.lock().unwrap().movies.contains_key(&id))
    }

    async fn find_all(&self, params: PaginationParams) -> AppResult<PaginatedResult<Movie>> {
        self.record_read();
        let state = self.state.lock().unwrap();
        let all = state.movies.values().map(|row| state.assemble(row)).collect();
        Ok(paginate(all, &params))
    }

    async fn find_by_genre(&self, genre: &str) -> AppResult<Vec<Movie>> {
        self.record_read();
        let state = self.state.lock().unwrap();
        Ok(state
            .movies
            .values()
            .filter(|row| row.draft.genre == genre)
            .map(|row| state.assemble(row))
            .collect())
    }

    async fn find_top_by_genre_order_by_avg_rating_desc(
        &self,
        genre: &str,
    ) -> AppResult<Vec<Movie>> {
        self.record_read();
        let state = self.state.lock().unwrap();
        let mut rated: Vec<(f64, Movie)> = state
            .movies
            .values()
            .filter(|row| row.draft.genre == genre)
            .map(|row| state.assemble(row))
            .filter_map(|movie| movie.average_rating().map(|avg| (avg, movie)))
            .collect();

        rated.sort_by(|(a_avg, a), (b_avg, b)| {
            b_avg
                .partial_cmp(a_avg)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.id.cmp(&b.id))
        });
        Ok(rated.into_iter().map(|(_, movie)| movie).collect())
    }

    async fn update_with_reviews(
        &self,
        id: i64,
        movie: MovieDraft,
        reviews: Vec<ReviewDraft>,
    ) -> AppResult<Movie> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();

        let row = MovieRow { id, draft: movie };
        match state.movies.get_mut(&id) {
            Some(existing) => *existing = row.clone(),
            None => return Err(AppError::movie_not_found(id)),
        }

        // Computed under the lock, like the row lock in the Diesel store
        let existing: Vec<Review> = state
            .reviews
            .values()
            .filter(|r| r.movie_id == id)
            .cloned()
            .collect();
        let replacement = ReviewReplacement::replace(&existing, reviews);
        for removed in &replacement.removed_ids {
            state.reviews.remove(removed);
        }
        for draft in replacement.added {
            state.insert_review(id, draft);
        }

        Ok(state.assemble(&row))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();

        if state.movies.remove(&id).is_none() {
            return Err(AppError::movie_not_found(id));
        }
        state.reviews.retain(|_, review| review.movie_id != id);
        Ok(())
    }
}

#[async_trait]
impl ReviewRepository for InMemoryStore {
    async fn save(&self, movie_id: i64, review: ReviewDraft) -> AppResult<Review> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();

        // Same outcome as the mapped foreign-key violation in the Diesel store
        if !state.movies.contains_key(&movie_id) {
            return Err(AppError::movie_not_found(movie_id));
        }
        Ok(state.insert_review(movie_id, review))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Review>> {
        self.record_read();
        Ok(self.state.lock().unwrap().reviews.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.state.lock().unwrap().reviews.contains_key(&id))
    }

    async fn find_all(&self, params: PaginationParams) -> AppResult<PaginatedResult<Review>> {
        self.record_read();
        let all = self
            .state
            .lock()
            .unwrap()
            .reviews
            .values()
            .cloned()
            .collect();
        Ok(paginate(all, &params))
    }

    async fn update(&self, id: i64, movie_id: i64, review: ReviewDraft) -> AppResult<Review> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();

        if !state.reviews.contains_key(&id) {
            return Err(AppError::review_not_found(id));
        }
        if !state.movies.contains_key(&movie_id) {
            return Err(AppError::movie_not_found(movie_id));
        }
        let updated = review.into_review(id, movie_id);
        state.reviews.insert(id, updated.clone());
        Ok(updated)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.check_writable()?;
        match self.state.lock().unwrap().reviews.remove(&id) {
            Some(_) => Ok(()),
            None => Err(AppError::review_not_found(id)),
        }
    }
}
