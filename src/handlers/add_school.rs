use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use crate::{
    handlers::{ApiError, AppState},
    libraries::validation::validate_new_school,
    models::{AddSchoolRequest, FieldError, School},
};

/// Handle `POST /school/addSchool`.
///
/// Validation runs first and short-circuits before the store is touched, so a
/// rejected request never creates a partial record.
pub async fn add_school(
    State(state): State<AppState>,
    payload: Result<Json<AddSchoolRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<School>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("malformed addSchool body: {rejection}");
        ApiError::Validation(vec![FieldError::new(
            "body",
            "Request body must be a JSON object",
        )])
    })?;

    let new_school = validate_new_school(&request).map_err(ApiError::Validation)?;
    let school = state.store.create(new_school).await?;

    info!(school_id = %school.id, "registered school {:?}", school.name);
    Ok((StatusCode::CREATED, Json(school)))
}
