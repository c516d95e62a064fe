use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;

use crate::log_debug;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::BasicCredentials;

/// Reject any request whose Basic credentials differ from the configured user
pub async fn require_basic_auth(
    State(credentials): State<Arc<BasicCredentials>>,
    request: Request,
    next: Next,
) -> AppResult<Response> {
    let (username, password) = parse_basic_auth(request.headers())?;

    if !credentials_match(&credentials, &username, &password) {
        log_debug!("Rejected credentials for user '{}'", username);
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    Ok(next.run(request).await)
}

/// Both fields are always compared so the outcome does not leak which one differed
fn credentials_match(expected: &BasicCredentials, username: &str, password: &str) -> bool {
    let user_ok = constant_time_eq(username.as_bytes(), expected.username.as_bytes());
    let pass_ok = constant_time_eq(password.as_bytes(), expected.password.as_bytes());
    user_ok & pass_ok
}

/// Running time depends on the lengths only, never on where the bytes differ
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Decode `Authorization: Basic <base64(user:password)>`
pub fn parse_basic_auth(headers: &HeaderMap) -> AppResult<(String, String)> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?
        .to_str()
        .map_err(|_| AppError::Unauthorized("Malformed Authorization header".to_string()))?;

    let encoded = value
        .strip_prefix("Basic ")
        .ok_or_else(|| AppError::Unauthorized("Expected Basic authentication".to_string()))?;

    let decoded = STANDARD
        .decode(encoded.trim())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .ok_or_else(|| AppError::Unauthorized("Malformed Basic credentials".to_string()))?;

    match decoded.split_once(':') {
        Some((username, password)) => Ok((username.to_string(), password.to_string())),
        None => Err(AppError::Unauthorized(
            "Malformed Basic credentials".to_string(),
        )),
    }
}
