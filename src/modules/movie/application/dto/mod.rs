pub mod movie_request;
pub mod movie_response;

pub use movie_request::*;
pub use movie_response::*;
