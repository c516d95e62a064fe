pub mod movie_repository;

#[cfg(test)]
pub use movie_repository::MockMovieRepository;
pub use movie_repository::MovieRepository;
