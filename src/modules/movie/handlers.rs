use super::application::dto::{GenreQuery, MovieRequest, MovieResponse};
use super::application::service::MovieService;
use crate::shared::application::{PageQuery, PaginatedResult};
use crate::shared::errors::AppResult;
use crate::shared::extractors::{ApiJson, ApiPath, ApiQuery};

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

/// POST /api/movies
pub async fn create_movie(
    State(movie_service): State<Arc<MovieService>>,
    ApiJson(request): ApiJson<MovieRequest>,
) -> AppResult<(StatusCode, Json<MovieResponse>)> {
    request.validate()?;
    let created = movie_service.create_movie_with_reviews(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/movies?page=&size=
pub async fn get_all_movies(
    State(movie_service): State<Arc<MovieService>>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> AppResult<Json<PaginatedResult<MovieResponse>>> {
    let params = query.into_params()?;
    Ok(Json(movie_service.get_all_movies(params).await?))
}

/// GET /api/movies/{id}
pub async fn get_movie(
    State(movie_service): State<Arc<MovieService>>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<MovieResponse>> {
    Ok(Json(movie_service.get_movie_by_id(id).await?))
}

/// PUT /api/movies/{id}
pub async fn update_movie(
    State(movie_service): State<Arc<MovieService>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<MovieRequest>,
) -> AppResult<Json<MovieResponse>> {
    request.validate()?;
    Ok(Json(movie_service.update_movie(id, request).await?))
}

/// DELETE /api/movies/{id}
pub async fn delete_movie(
    State(movie_service): State<Arc<MovieService>>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<StatusCode> {
    movie_service.delete_movie(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/movies/by-genre?genre=
pub async fn find_movies_by_genre(
    State(movie_service): State<Arc<MovieService>>,
    ApiQuery(query): ApiQuery<GenreQuery>,
) -> AppResult<Json<Vec<MovieResponse>>> {
    query.validate()?;
    Ok(Json(movie_service.find_movies_by_genre(&query.genre).await?))
}

/// GET /api/movies/top-by-genre?genre=
pub async fn find_top_rated_movies_by_genre(
    State(movie_service): State<Arc<MovieService>>,
    ApiQuery(query): ApiQuery<GenreQuery>,
) -> AppResult<Json<Vec<MovieResponse>>> {
    query.validate()?;
    Ok(Json(
        movie_service
            .find_top_rated_movies_by_genre(&query.genre)
            .await?,
    ))
}
