pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::{Movie, MovieDraft, ReviewReplacement};
pub use repositories::MovieRepository;
