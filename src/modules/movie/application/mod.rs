pub mod dto;
pub mod mapper;
pub mod service;

pub use mapper::MovieMapper;
pub use service::MovieService;
