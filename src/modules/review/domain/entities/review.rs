use serde::{Deserialize, Serialize};

/// A persisted review. Always attached to exactly one movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub rating: i32,
    pub comment: String,
    pub reviewer_name: String,
    pub movie_id: i64,
}

/// Scalar review fields before the review is stored and attached to a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub rating: i32,
    pub comment: String,
    pub reviewer_name: String,
}

impl ReviewDraft {
    pub fn new(rating: i32, comment: impl Into<String>, reviewer_name: impl Into<String>) -> Self {
        Self {
            rating,
            comment: comment.into(),
            reviewer_name: reviewer_name.into(),
        }
    }

    /// Attach the draft to a movie under an identity assigned by the store
    pub fn into_review(self, id: i64, movie_id: i64) -> Review {
        Review {
            id,
            rating: self.rating,
            comment: self.comment,
            reviewer_name: self.reviewer_name,
            movie_id,
        }
    }
}
