pub mod review;

pub use review::{Review, ReviewDraft};
