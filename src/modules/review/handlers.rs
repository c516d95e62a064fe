use super::application::dto::{ReviewCreateRequest, ReviewResponse, ReviewUpdateRequest};
use super::application::service::ReviewService;
use crate::shared::application::{PageQuery, PaginatedResult};
use crate::shared::errors::AppResult;
use crate::shared::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::log_debug;

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

/// POST /api/reviews
pub async fn create_review(
    State(review_service): State<Arc<ReviewService>>,
    ApiJson(request): ApiJson<ReviewCreateRequest>,
) -> AppResult<(StatusCode, Json<ReviewResponse>)> {
    request.validate()?;
    let created = review_service.create_review(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/reviews?page=&size=
pub async fn get_all_reviews(
    State(review_service): State<Arc<ReviewService>>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> AppResult<Json<PaginatedResult<ReviewResponse>>> {
    let params = query.into_params()?;
    log_debug!("Listing reviews page {} size {}", params.page, params.page_size);
    Ok(Json(review_service.get_all_reviews(params).await?))
}

/// GET /api/reviews/{id}
pub async fn get_review(
    State(review_service): State<Arc<ReviewService>>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<ReviewResponse>> {
    Ok(Json(review_service.get_review_by_id(id).await?))
}

/// PUT /api/reviews/{id}
pub async fn update_review(
    State(review_service): State<Arc<ReviewService>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<ReviewUpdateRequest>,
) -> AppResult<Json<ReviewResponse>> {
    request.validate()?;
    Ok(Json(review_service.update_review(id, request).await?))
}

/// DELETE /api/reviews/{id}
pub async fn delete_review(
    State(review_service): State<Arc<ReviewService>>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<StatusCode> {
    review_service.delete_review(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
