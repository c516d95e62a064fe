pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::ReviewService;
pub use domain::{Review, ReviewDraft, ReviewRepository};
pub use infrastructure::ReviewRepositoryImpl;
