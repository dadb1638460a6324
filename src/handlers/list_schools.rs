use axum::{
    extract::{Query, State},
    Json,
};
use tracing::debug;

use crate::{
    handlers::{ApiError, AppState},
    libraries::ranking::rank,
    libraries::validation::parse_reference,
    models::{ListSchoolsQuery, RankedSchool},
};

/// Handle `GET /school/listSchools`.
///
/// Takes a full snapshot of the store and ranks it in memory; the endpoint
/// is unpaginated.
pub async fn list_schools(
    State(state): State<AppState>,
    Query(query): Query<ListSchoolsQuery>,
) -> Result<Json<Vec<RankedSchool>>, ApiError> {
    let reference = parse_reference(&query).map_err(ApiError::Validation)?;

    let schools = state.store.list_all().await?;
    debug!(
        "ranking {} schools against ({}, {})",
        schools.len(),
        reference.latitude,
        reference.longitude
    );

    Ok(Json(rank(&reference, schools)))
}
