use serde::{Deserialize, Serialize};

use crate::modules::review::domain::{Review, ReviewDraft};

/// A persisted movie together with the reviews it owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub director: String,
    pub reviews: Vec<Review>,
}

impl Movie {
    /// Mean rating over all reviews, `None` for a movie nobody reviewed
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: i64 = self.reviews.iter().map(|r| r.rating as i64).sum();
        Some(total as f64 / self.reviews.len() as f64)
    }
}

/// Scalar movie fields before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDraft {
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub director: String,
}

impl MovieDraft {
    pub fn new(
        title: impl Into<String>,
        release_year: i32,
        genre: impl Into<String>,
        director: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            release_year,
            genre: genre.into(),
            director: director.into(),
        }
    }

    pub fn into_movie(self, id: i64, reviews: Vec<Review>) -> Movie {
        Movie {
            id,
            title: self.title,
            release_year: self.release_year,
            genre: self.genre,
            director: self.director,
            reviews,
        }
    }
}

/// Wholesale replacement of a movie's review collection.
///
/// Incoming reviews never carry an identity, so every existing review is
/// dropped from the collection and every incoming one is inserted fresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewReplacement {
    pub removed_ids: Vec<i64>,
    pub added: Vec<ReviewDraft>,
}

impl ReviewReplacement {
    pub fn replace(existing: &[Review], incoming: Vec<ReviewDraft>) -> Self {
        Self {
            removed_ids: existing.iter().map(|r| r.id).collect(),
            added: incoming,
        }
    }
}
