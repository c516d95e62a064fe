pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::MovieService;
pub use domain::{Movie, MovieDraft, MovieRepository, ReviewReplacement};
pub use infrastructure::MovieRepositoryImpl;
