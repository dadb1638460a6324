use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod handlers;
pub mod libraries;
pub mod models;
pub mod services;

pub use handlers::AppState;

use handlers::{add_school, health, list_schools, root};

/// Build the application router. Shared between `main` and the endpoint tests.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/school/addSchool", post(add_school))
        .route("/school/listSchools", get(list_schools))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
