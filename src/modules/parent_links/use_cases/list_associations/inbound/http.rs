use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::parent_links::core::projections::AssociationRow;
use crate::modules::parent_links::use_cases::associate_parent::inbound::http::AssociationResponse;
use crate::shared::auth::principal::Principal;
use crate::shared::core::primitives::{StudentId, UserId, UserRole};
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

fn respond(
    rows: anyhow::Result<Vec<AssociationRow>>,
) -> Result<Json<Vec<AssociationResponse>>, ApiError> {
    let rows = rows.map_err(|e| {
        tracing::error!(error = %e, "listing associations failed");
        ApiError::internal()
    })?;
    Ok(Json(rows.into_iter().map(AssociationResponse::from).collect()))
}

pub async fn handle_by_parent(
    State(state): State<AppState>,
    principal: Principal,
    Path(parent_id): Path<String>,
) -> Result<Json<Vec<AssociationResponse>>, ApiError> {
    principal.require_any(&[UserRole::Admin, UserRole::Parent])?;
    let parent_id =
        UserId::parse(&parent_id).map_err(|_| ApiError::bad_request("Invalid parent ID format"))?;
    state.access.ensure_self(&principal, parent_id)?;
    respond(state.associations.list_by_parent(parent_id).await)
}

pub async fn handle_by_student(
    State(state): State<AppState>,
    principal: Principal,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<AssociationResponse>>, ApiError> {
    principal.require_any(&[UserRole::Admin, UserRole::Teacher, UserRole::Parent])?;
    let student_id = StudentId::parse(&student_id)
        .map_err(|_| ApiError::bad_request("Invalid student ID format"))?;
    state.access.ensure_student(&principal, student_id).await?;
    respond(state.associations.list_by_student(student_id).await)
}
