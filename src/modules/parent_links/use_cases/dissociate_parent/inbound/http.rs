use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;

use crate::modules::parent_links::use_cases::dissociate_parent::command::DissociateParent;
use crate::modules::parent_links::use_cases::dissociate_parent::decide::DecideError;
use crate::shared::auth::principal::Principal;
use crate::shared::core::primitives::{AssociationId, UserRole};
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
    Path(association_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    principal.require_any(&[UserRole::Admin])?;
    let association_id = AssociationId::parse(&association_id)
        .map_err(|_| ApiError::bad_request("Invalid association ID format"))?;

    state
        .dissociate_parent
        .handle(DissociateParent {
            association_id,
            dissociated_at: Utc::now().timestamp_millis(),
        })
        .await?;
    tracing::info!(%association_id, "parent unlinked from student");

    Ok(StatusCode::NO_CONTENT)
}
