//! HTTP error mapping

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use crate::api::types::ErrorResponse;
use crate::errors::SentiscaleError;

pub const MISSING_TEXT: &str = "Missing 'text' in request body";

#[derive(Debug)]
pub enum ApiError {
    /// Request body rejected before any scoring happened
    BadRequest(String),
    /// Detection or scoring failed; the message is passed through as-is
    Internal(String),
}

impl ApiError {
    pub fn missing_text() -> Self {
        Self::BadRequest(MISSING_TEXT.to_string())
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SentiscaleError> for ApiError {
    fn from(err: SentiscaleError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(message) | Self::Internal(message) => message,
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
