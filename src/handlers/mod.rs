pub mod add_school;
pub mod error;
pub mod list_schools;

use std::sync::Arc;

use axum::{response::IntoResponse, Json};

use crate::services::store::SchoolStore;

pub use add_school::add_school;
pub use error::ApiError;
pub use list_schools::list_schools;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SchoolStore>,
}

pub async fn root() -> &'static str {
    "Welcome to the edunext API"
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "edunext-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
