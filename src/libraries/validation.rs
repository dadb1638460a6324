use crate::models::{AddSchoolRequest, Coordinate, FieldError, ListSchoolsQuery, NewSchool};

const LATITUDE_MIN: f64 = -90.0;
const LATITUDE_MAX: f64 = 90.0;
const LONGITUDE_MIN: f64 = -180.0;
const LONGITUDE_MAX: f64 = 180.0;

/// Validate a school creation request.
///
/// All violations are collected so the caller gets one itemized response;
/// nothing reaches the store until every field passes.
pub fn validate_new_school(request: &AddSchoolRequest) -> Result<NewSchool, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = request.name.as_deref().map(str::trim).unwrap_or("");
    if name.is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }

    let address = request.address.as_deref().map(str::trim).unwrap_or("");
    if address.is_empty() {
        errors.push(FieldError::new("address", "Address is required"));
    }

    let latitude = check_bounds("latitude", request.latitude, LATITUDE_MIN, LATITUDE_MAX, &mut errors);
    let longitude = check_bounds(
        "longitude",
        request.longitude,
        LONGITUDE_MIN,
        LONGITUDE_MAX,
        &mut errors,
    );

    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) if errors.is_empty() => Ok(NewSchool {
            name: name.to_string(),
            address: address.to_string(),
            latitude,
            longitude,
        }),
        _ => Err(errors),
    }
}

/// Coerce and validate the caller's reference coordinate from query text.
pub fn parse_reference(query: &ListSchoolsQuery) -> Result<Coordinate, Vec<FieldError>> {
    let mut errors = Vec::new();

    let latitude = coerce_bounds(
        "userLatitude",
        query.user_latitude.as_deref(),
        LATITUDE_MIN,
        LATITUDE_MAX,
        &mut errors,
    );
    let longitude = coerce_bounds(
        "userLongitude",
        query.user_longitude.as_deref(),
        LONGITUDE_MIN,
        LONGITUDE_MAX,
        &mut errors,
    );

    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) if errors.is_empty() => {
            Ok(Coordinate::new(latitude, longitude))
        }
        _ => Err(errors),
    }
}

fn check_bounds(
    field: &str,
    value: Option<f64>,
    min: f64,
    max: f64,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let label = capitalized(field);
    let Some(value) = value else {
        errors.push(FieldError::new(field, format!("{label} is required")));
        return None;
    };
    if !value.is_finite() || value < min || value > max {
        errors.push(FieldError::new(
            field,
            format!("{label} must be between {min} and {max}"),
        ));
        return None;
    }
    Some(value)
}

fn coerce_bounds(
    field: &str,
    raw: Option<&str>,
    min: f64,
    max: f64,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let Some(raw) = raw else {
        errors.push(FieldError::new(field, format!("{field} is required")));
        return None;
    };
    let Ok(value) = raw.trim().parse::<f64>() else {
        errors.push(FieldError::new(field, format!("{field} must be a number")));
        return None;
    };
    if !value.is_finite() {
        errors.push(FieldError::new(field, format!("{field} must be a number")));
        return None;
    }
    if value < min || value > max {
        errors.push(FieldError::new(
            field,
            format!("{field} must be between {min} and {max}"),
        ));
        return None;
    }
    Some(value)
}

fn capitalized(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
