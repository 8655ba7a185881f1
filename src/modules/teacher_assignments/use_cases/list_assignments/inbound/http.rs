use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::teacher_assignments::core::projections::AssignmentRow;
use crate::modules::teacher_assignments::use_cases::assign_teacher::inbound::http::AssignmentResponse;
use crate::shared::auth::principal::Principal;
use crate::shared::core::primitives::{ClassId, UserId, UserRole};
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

fn respond(rows: anyhow::Result<Vec<AssignmentRow>>) -> Result<Json<Vec<AssignmentResponse>>, ApiError> {
    let rows = rows.map_err(|e| {
        tracing::error!(error = %e, "listing assignments failed");
        ApiError::internal()
    })?;
    Ok(Json(rows.into_iter().map(AssignmentResponse::from).collect()))
}

pub async fn handle_by_teacher(
    State(state): State<AppState>,
    principal: Principal,
    Path(teacher_id): Path<String>,
) -> Result<Json<Vec<AssignmentResponse>>, ApiError> {
    principal.require_any(&[UserRole::Admin, UserRole::Teacher])?;
    let teacher_id =
        UserId::parse(&teacher_id).map_err(|_| ApiError::bad_request("Invalid teacher ID format"))?;
    state.access.ensure_self(&principal, teacher_id)?;
    respond(state.assignments.list_by_teacher(teacher_id).await)
}

pub async fn handle_by_class(
    State(state): State<AppState>,
    principal: Principal,
    Path(class_id): Path<String>,
) -> Result<Json<Vec<AssignmentResponse>>, ApiError> {
    principal.require_any(&[UserRole::Admin, UserRole::Teacher])?;
    let class_id =
        ClassId::parse(&class_id).map_err(|_| ApiError::bad_request("Invalid class ID format"))?;
    state.access.ensure_class(&principal, class_id).await?;
    respond(state.assignments.list_by_class(class_id).await)
}
