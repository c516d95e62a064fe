/// Shared infrastructure concerns
///
/// This module contains infrastructure implementations that are shared across
/// the movie and review modules.
pub mod config;
pub mod database;

// Re-exports for convenience
pub use config::{AppConfig, BasicCredentials};
pub use database::Database;
