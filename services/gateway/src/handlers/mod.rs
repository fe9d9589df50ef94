pub mod wallet;

use crate::error::AppError;
use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Serialize a JSON response body, surfacing encoder failures as 500s.
pub(crate) fn json_response<T: Serialize>(value: &T) -> Result<Response, AppError> {
    let body = serde_json::to_vec(value)
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("Failed to serialize response: {}", e)))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
