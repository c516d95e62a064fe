pub mod movie;

pub use movie::{Movie, MovieDraft, ReviewReplacement};
