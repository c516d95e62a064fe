use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppResult, FieldError};
use crate::shared::utils::validation::FieldResult;
use crate::shared::utils::Validator;

const MAX_COMMENT_LENGTH: usize = 10_000;
const MAX_REVIEWER_NAME_LENGTH: usize = 255;

/// Review fields as they appear nested inside a movie request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub rating: i32,
    pub comment: String,
    pub reviewer_name: String,
}

impl ReviewRequest {
    pub fn new(rating: i32, comment: impl Into<String>, reviewer_name: impl Into<String>) -> Self {
        Self {
            rating,
            comment: comment.into(),
            reviewer_name: reviewer_name.into(),
        }
    }

    /// Push every failing field into `errors`, naming fields under `prefix`
    pub fn collect_errors(&self, prefix: &str, errors: &mut Vec<FieldError>) {
        validate_review_fields(
            prefix,
            self.rating,
            &self.comment,
            &self.reviewer_name,
            errors,
        );
    }

    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();
        self.collect_errors("", &mut errors);
        Validator::collect(errors)
    }
}

/// Standalone review creation; the review is attached to `movie_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreateRequest {
    pub movie_id: i64,
    pub rating: i32,
    pub comment: String,
    pub reviewer_name: String,
}

impl ReviewCreateRequest {
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();
        push(&mut errors, Validator::validate_id("movieId", self.movie_id));
        validate_review_fields(
            "",
            self.rating,
            &self.comment,
            &self.reviewer_name,
            &mut errors,
        );
        Validator::collect(errors)
    }
}

/// Review update. Without `movie_id` the review stays on its current movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUpdateRequest {
    pub rating: i32,
    pub comment: String,
    pub reviewer_name: String,
    #[serde(default)]
    pub movie_id: Option<i64>,
}

impl ReviewUpdateRequest {
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();
        if let Some(movie_id) = self.movie_id {
            push(&mut errors, Validator::validate_id("movieId", movie_id));
        }
        validate_review_fields(
            "",
            self.rating,
            &self.comment,
            &self.reviewer_name,
            &mut errors,
        );
        Validator::collect(errors)
    }
}

fn validate_review_fields(
    prefix: &str,
    rating: i32,
    comment: &str,
    reviewer_name: &str,
    errors: &mut Vec<FieldError>,
) {
    let field = |name: &str| format!("{}{}", prefix, name);

    push(errors, Validator::validate_rating(&field("rating"), rating));
    push(
        errors,
        Validator::validate_required_text(&field("comment"), comment, MAX_COMMENT_LENGTH),
    );
    push(
        errors,
        Validator::validate_required_text(
            &field("reviewerName"),
            reviewer_name,
            MAX_REVIEWER_NAME_LENGTH,
        ),
    );
}

fn push(errors: &mut Vec<FieldError>, result: FieldResult) {
    if let Err(e) = result {
        errors.push(e);
    }
}
