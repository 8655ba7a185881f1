use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::students::core::projections::StudentRow;
use crate::modules::students::use_cases::get_student::inbound::http::StudentResponse;
use crate::shared::auth::principal::Principal;
use crate::shared::core::primitives::{ClassId, UserRole};
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn list_students(
    state: &AppState,
    principal: &Principal,
    raw_class_id: &str,
) -> Result<Vec<StudentRow>, ApiError> {
    principal.require_any(&[UserRole::Admin, UserRole::Teacher])?;
    let class_id = ClassId::parse(raw_class_id)
        .map_err(|_| ApiError::bad_request("Invalid class ID format"))?;
    state.access.ensure_class(principal, class_id).await?;

    let internal = |e: anyhow::Error| {
        tracing::error!(error = %e, %class_id, "listing students failed");
        ApiError::internal()
    };
    if state.classes.find_by_id(class_id).await.map_err(internal)?.is_none() {
        return Err(ApiError::not_found("Class not found"));
    }
    state.students.list_by_class(class_id).await.map_err(internal)
}

pub async fn handle(
    State(state): State<AppState>,
    principal: Principal,
    Path(class_id): Path<String>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let rows = list_students(&state, &principal, &class_id).await?;
    Ok(Json(rows.into_iter().map(StudentResponse::from).collect()))
}
