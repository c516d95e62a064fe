use crate::modules::movie::domain::{Movie, MovieDraft};
use crate::modules::review::domain::Review;
use crate::schema::movie;
use diesel::prelude::*;

// ============= MOVIE MODELS =============

// For reading from database; QueryableByName backs the raw top-rated query
#[derive(Queryable, QueryableByName, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = movie)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MovieModel {
    pub id: i64,
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub director: String,
}

// For inserting new movies
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movie)]
pub struct NewMovieModel {
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub director: String,
}

// For updating existing movies (excludes id)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = movie)]
pub struct MovieChangeset {
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub director: String,
}

impl MovieModel {
    pub fn into_entity(self, reviews: Vec<Review>) -> Movie {
        Movie {
            id: self.id,
            title: self.title,
            release_year: self.release_year,
            genre: self.genre,
            director: self.director,
            reviews,
        }
    }
}

impl From<MovieDraft> for NewMovieModel {
    fn from(draft: MovieDraft) -> Self {
        Self {
            title: draft.title,
            release_year: draft.release_year,
            genre: draft.genre,
            director: draft.director,
        }
    }
}

impl From<MovieDraft> for MovieChangeset {
    fn from(draft: MovieDraft) -> Self {
        Self {
            title: draft.title,
            release_year: draft.release_year,
            genre: draft.genre,
            director: draft.director,
        }
    }
}
