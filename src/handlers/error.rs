use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::models::FieldError;
use crate::services::store::StoreError;

/// Failures a handler can surface to the caller.
///
/// Validation problems are itemized per field; everything else collapses into
/// a generic 503 so collaborator details never leak to clients.
#[derive(Debug)]
pub enum ApiError {
    Validation(Vec<FieldError>),
    Upstream(anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Upstream(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "Validation failed",
                    "errors": errors,
                })),
            )
                .into_response(),
            ApiError::Upstream(cause) => {
                error!("upstream failure: {cause:#}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({ "message": "Service unavailable" })),
                )
                    .into_response()
            }
        }
    }
}
