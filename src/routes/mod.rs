pub mod auth;
pub mod registry;

pub use registry::{build_router, AppState};
