use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;

use crate::modules::teacher_assignments::use_cases::unassign_teacher::command::UnassignTeacher;
use crate::modules::teacher_assignments::use_cases::unassign_teacher::decide::DecideError;
use crate::shared::auth::principal::Principal;
use crate::shared::core::primitives::{AssignmentId, UserRole};
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

impl From<DecideError> for ApiError {
    fn from(error: DecideError) -> Self {
        ApiError::not_found(error.to_string())
    }
}

pub async fn handle(
    State(state): State<AppState>,
    principal: Principal,
    Path(assignment_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    principal.require_any(&[UserRole::Admin])?;
    let assignment_id = AssignmentId::parse(&assignment_id)
        .map_err(|_| ApiError::bad_request("Invalid assignment ID format"))?;

    state
        .unassign_teacher
        .handle(UnassignTeacher {
            assignment_id,
            unassigned_at: Utc::now().timestamp_millis(),
        })
        .await?;
    tracing::info!(%assignment_id, "teacher unassigned from class");

    Ok(StatusCode::NO_CONTENT)
}
