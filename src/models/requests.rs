use serde::{Deserialize, Serialize};

/// Body of `POST /school/addSchool`.
///
/// Every field is optional at the deserialization layer so that missing
/// fields surface as per-field validation errors instead of a transport
/// rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddSchoolRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Query parameters of `GET /school/listSchools`. Kept as raw text so the
/// validation gate owns the number coercion and its error messages.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListSchoolsQuery {
    #[serde(rename = "userLatitude")]
    pub user_latitude: Option<String>,
    #[serde(rename = "userLongitude")]
    pub user_longitude: Option<String>,
}

/// One violated constraint in a validation failure response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub issue: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, issue: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            issue: issue.into(),
        }
    }
}
