// Bounded contexts
pub mod movie; // Movie aggregate: movies and the reviews they own
pub mod review; // Standalone review operations
