use crate::modules::movie::infrastructure::models::MovieModel;
use crate::modules::review::domain::{Review, ReviewDraft};
use crate::schema::review;
use diesel::prelude::*;

// ============= REVIEW MODELS =============

// For reading from database - grouped under their movie via Associations
#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq)]
#[diesel(belongs_to(MovieModel, foreign_key = movie_id))]
#[diesel(table_name = review)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReviewModel {
    pub id: i64,
    pub rating: i32,
    pub comment: String,
    pub reviewer_name: String,
    pub movie_id: i64,
}

// For inserting new reviews
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = review)]
pub struct NewReviewModel {
    pub rating: i32,
    pub comment: String,
    pub reviewer_name: String,
    pub movie_id: i64,
}

// For updating existing reviews (excludes id)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = review)]
pub struct ReviewChangeset {
    pub rating: i32,
    pub comment: String,
    pub reviewer_name: String,
    pub movie_id: i64,
}

impl From<ReviewModel> for Review {
    fn from(model: ReviewModel) -> Self {
        Review {
            id: model.id,
            rating: model.rating,
            comment: model.comment,
            reviewer_name: model.reviewer_name,
            movie_id: model.movie_id,
        }
    }
}

impl NewReviewModel {
    pub fn from_draft(movie_id: i64, draft: ReviewDraft) -> Self {
        Self {
            rating: draft.rating,
            comment: draft.comment,
            reviewer_name: draft.reviewer_name,
            movie_id,
        }
    }
}

impl ReviewChangeset {
    pub fn from_draft(movie_id: i64, draft: ReviewDraft) -> Self {
        Self {
            rating: draft.rating,
            comment: draft.comment,
            reviewer_name: draft.reviewer_name,
            movie_id,
        }
    }
}
