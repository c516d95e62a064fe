use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::app_error::AppError;
use crate::log_error;

/// JSON body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ApiError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_)
            | AppError::InternalError(_)
            | AppError::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn to_api_error(&self) -> ApiError {
        match self {
            AppError::NotFound(message) => ApiError::new("NOT_FOUND", message.clone()),
            AppError::ValidationError(fields) => ApiError {
                code: "VALIDATION_ERROR".to_string(),
                message: "Request validation failed".to_string(),
                details: Some(fields.clone()),
            },
            AppError::InvalidInput(message) => ApiError::new("INVALID_INPUT", message.clone()),
            AppError::Unauthorized(message) => ApiError::new("UNAUTHORIZED", message.clone()),
            // Store and internal failures are logged in full but not echoed to clients
            AppError::DatabaseError(_) => {
                ApiError::new("DATABASE_ERROR", "The data store failed to process the request")
            }
            AppError::InternalError(_) | AppError::SerializationError(_) => {
                ApiError::new("INTERNAL_ERROR", "Internal server error")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log_error!("Request failed: {}", self);
        }

        let mut response = (status, Json(self.to_api_error())).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"movie-reviews\""),
            );
        }
        response
    }
}
