pub mod dto;
pub mod mapper;
pub mod service;

pub use mapper::ReviewMapper;
pub use service::ReviewService;
