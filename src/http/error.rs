use std::any::Any;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::error::QuoteError;

const INTERNAL_MESSAGE: &str = "Internal server error";

impl IntoResponse for QuoteError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if self.is_internal() {
            error!("request failed: {self}");
            INTERNAL_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<JsonRejection> for QuoteError {
    fn from(rejection: JsonRejection) -> Self {
        QuoteError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for QuoteError {
    fn from(rejection: QueryRejection) -> Self {
        QuoteError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for QuoteError {
    fn from(rejection: PathRejection) -> Self {
        QuoteError::Validation(rejection.body_text())
    }
}

/// Render a panicking handler as a generic 500.
pub(super) fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    QuoteError::Internal(format!("handler panicked: {detail}")).into_response()
}
