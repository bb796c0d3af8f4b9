use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

use crate::utils::response::error as error_response;

/// The two failure kinds the API is designed to produce. Anything else
/// escaping a handler is a bug, not a response path.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
        };

        warn!(status = %status, message = %message, "Request rejected");

        error_response(message, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = AppError::Validation("bad body".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::NotFound("Event 9 not found".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
