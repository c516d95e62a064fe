pub mod review_request;
pub mod review_response;

pub use review_request::*;
pub use review_response::*;
