use serde::{Deserialize, Serialize};

use crate::modules::review::domain::Review;

/// Review representation; also used for reviews nested in a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: i64,
    pub rating: i32,
    pub comment: String,
    pub reviewer_name: String,
    pub movie_id: i64,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            rating: review.rating,
            comment: review.comment,
            reviewer_name: review.reviewer_name,
            movie_id: review.movie_id,
        }
    }
}
