use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;

use crate::modules::identity::use_cases::change_user_status::command::{
    ChangeUserStatus, UserStatus,
};
use crate::modules::identity::use_cases::change_user_status::decide::DecideError;
use crate::modules::identity::use_cases::register_user::inbound::http::UserResponse;
use crate::shared::auth::principal::Principal;
use crate::shared::core::primitives::{UserId, UserRole};
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

impl From<DecideError> for ApiError {
    fn from(error: DecideError) -> Self {
        match error {
            DecideError::NotFound => ApiError::not_found(error.to_string()),
            DecideError::AlreadyActive | DecideError::AlreadyDeactivated => {
                ApiError::bad_request(error.to_string())
            }
        }
    }
}

pub async fn handle_deactivate(
    State(state): State<AppState>,
    principal: Principal,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    change(state, principal, user_id, UserStatus::Deactivated).await
}

pub async fn handle_activate(
    State(state): State<AppState>,
    principal: Principal,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    change(state, principal, user_id, UserStatus::Active).await
}

async fn change(
    state: AppState,
    principal: Principal,
    user_id: String,
    status: UserStatus,
) -> Result<Json<UserResponse>, ApiError> {
    principal.require_any(&[UserRole::Admin])?;
    let user_id =
        UserId::parse(&user_id).map_err(|_| ApiError::bad_request("Invalid user ID format"))?;

    let user = state
        .change_user_status
        .handle(ChangeUserStatus {
            user_id,
            status,
            changed_at: Utc::now().timestamp_millis(),
        })
        .await?;
    tracing::info!(user_id = %user.user_id, active = user.is_active, changed_by = %principal.user_id, "user status changed");

    Ok(Json(UserResponse::from(&user)))
}
