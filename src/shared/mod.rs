// Shared Kernel
// Cross-cutting pieces used by both the movie and review modules

pub mod application; // Shared application layer patterns (pagination)
pub mod cache; // Read-through cache port and in-memory adapter
pub mod errors; // Shared error types
pub mod extractors; // Request extractors answering with the JSON error body
pub mod infrastructure; // Shared infrastructure (database, configuration)
pub mod utils; // Logging and validation

// Re-exports for convenience
pub use infrastructure::config::AppConfig;
pub use infrastructure::database::Database;
