use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::modules::classes::core::projections::ClassRow;
use crate::modules::classes::core::state::SchoolClass;
use crate::shared::auth::principal::Principal;
use crate::shared::core::primitives::{ClassId, UserRole};
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassResponse {
    pub class_id: String,
    pub name: String,
    pub grade_level: String,
    pub academic_year: String,
}

impl From<&SchoolClass> for ClassResponse {
    fn from(class: &SchoolClass) -> Self {
        Self {
            class_id: class.class_id.to_string(),
            name: class.name.to_string(),
            grade_level: class.grade_level.display(),
            academic_year: class.academic_year.to_string(),
        }
    }
}

impl From<ClassRow> for ClassResponse {
    fn from(row: ClassRow) -> Self {
        Self {
            class_id: row.class_id.to_string(),
            name: row.name,
            grade_level: row.grade_level.display(),
            academic_year: row.academic_year,
        }
    }
}

/// Shared by HTTP and GraphQL: role gate, id parse, ownership, lookup.
pub async fn load_class(
    state: &AppState,
    principal: &Principal,
    raw_id: &str,
) -> Result<ClassRow, ApiError> {
    principal.require_any(&[UserRole::Admin, UserRole::Teacher])?;
    let class_id =
        ClassId::parse(raw_id).map_err(|_| ApiError::bad_request("Invalid class ID format"))?;
    state.access.ensure_class(principal, class_id).await?;
    state
        .classes
        .find_by_id(class_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "class lookup failed");
            ApiError::internal()
        })?
        .ok_or_else(|| ApiError::not_found("Class not found"))
}

pub async fn handle(
    State(state): State<AppState>,
    principal: Principal,
    Path(class_id): Path<String>,
) -> Result<Json<ClassResponse>, ApiError> {
    let row = load_class(&state, &principal, &class_id).await?;
    Ok(Json(ClassResponse::from(row)))
}
