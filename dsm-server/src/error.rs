use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

/// Request-level errors. Everything else (bad query parameters, empty
/// result sets) degrades to empty or default results instead of failing.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Component not found")]
    ComponentNotFound,

    #[error("App not found")]
    AppNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::NOT_FOUND, body).into_response()
    }
}
