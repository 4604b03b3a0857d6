//! Error types for the review server

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use doc_extract::ExtractError;
use serde::Serialize;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ServerError::Extract(ExtractError::UnsupportedFormat(_)) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "UNSUPPORTED_FORMAT")
            }
            ServerError::Extract(ExtractError::Parse(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "PARSE_ERROR")
            }
            ServerError::Extract(ExtractError::PasswordProtected) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "PASSWORD_PROTECTED")
            }
            ServerError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
        };

        let body = Json(ErrorResponse {
            success: false,
            error: self.to_string(),
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}
