use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub errors: Vec<ErrorMessage>,
}

/// Renders the `{"errors": [{"message": ...}]}` body every failure path uses.
pub fn error(message: impl Into<String>, status: StatusCode) -> Response {
    let body = ErrorBody {
        errors: vec![ErrorMessage {
            message: message.into(),
        }],
    };

    (status, Json(body)).into_response()
}
