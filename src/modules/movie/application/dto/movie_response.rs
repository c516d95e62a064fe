use serde::{Deserialize, Serialize};

use crate::modules::movie::domain::Movie;
use crate::modules::review::application::dto::ReviewResponse;

/// Movie representation including its reviews
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: i64,
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub director: String,
    pub reviews: Vec<ReviewResponse>,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            release_year: movie.release_year,
            genre: movie.genre,
            director: movie.director,
            reviews: movie.reviews.into_iter().map(ReviewResponse::from).collect(),
        }
    }
}
