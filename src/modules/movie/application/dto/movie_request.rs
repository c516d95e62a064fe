use serde::{Deserialize, Serialize};

use crate::modules::review::application::dto::ReviewRequest;
use crate::shared::errors::{AppResult, FieldError};
use crate::shared::utils::Validator;

const MAX_TITLE_LENGTH: usize = 255;
const MAX_GENRE_LENGTH: usize = 100;
const MAX_DIRECTOR_LENGTH: usize = 255;

/// Body of movie create and update requests.
///
/// On update `reviews` replaces the whole collection; omitting it clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRequest {
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub director: String,
    #[serde(default)]
    pub reviews: Vec<ReviewRequest>,
}

impl MovieRequest {
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
            reviews: Vec::new(),
        }
    }

    pub fn with_review(mut self, review: ReviewRequest) -> Self {
        self.reviews.push(review);
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        let checks = [
            Validator::validate_required_text("title", &self.title, MAX_TITLE_LENGTH),
            Validator::validate_release_year("releaseYear", self.release_year),
            Validator::validate_required_text("genre", &self.genre, MAX_GENRE_LENGTH),
            Validator::validate_required_text("director", &self.director, MAX_DIRECTOR_LENGTH),
        ];
        let mut errors: Vec<FieldError> = checks.into_iter().filter_map(Result::err).collect();

        for (index, review) in self.reviews.iter().enumerate() {
            review.collect_errors(&format!("reviews[{}].", index), &mut errors);
        }

        Validator::collect(errors)
    }
}

/// `?genre=` query for the genre lookups
#[derive(Debug, Clone, Deserialize)]
pub struct GenreQuery {
    pub genre: String,
}

impl GenreQuery {
    pub fn validate(&self) -> AppResult<()> {
        let errors = Validator::validate_required_text("genre", &self.genre, MAX_GENRE_LENGTH)
            .err()
            .into_iter()
            .collect();
        Validator::collect(errors)
    }
}
