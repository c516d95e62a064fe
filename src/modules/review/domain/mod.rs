pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::{Review, ReviewDraft};
pub use repositories::ReviewRepository;
