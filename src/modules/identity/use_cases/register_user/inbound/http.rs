use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::identity::core::email_address::EmailAddress;
use crate::modules::identity::core::password::PasswordError;
use crate::modules::identity::core::projections::UserRow;
use crate::modules::identity::core::state::User;
use crate::modules::identity::use_cases::register_user::command::RegisterUser;
use crate::modules::identity::use_cases::register_user::decide::DecideError;
use crate::shared::auth::principal::Principal;
use crate::shared::core::primitives::{UserId, UserRole};
use crate::shared::http::api_error::{ApiError, json_body, required};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserBody {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// User as returned by the API. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.to_string(),
            email: user.email.to_string(),
            role: user.role,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            is_active: user.is_active,
        }
    }
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.user_id.to_string(),
            email: row.email,
            role: row.role,
            first_name: row.first_name,
            last_name: row.last_name,
            is_active: row.is_active,
        }
    }
}

impl From<DecideError> for ApiError {
    fn from(error: DecideError) -> Self {
        match error {
            DecideError::AlreadyExists(_) => ApiError::conflict(error.to_string()),
            DecideError::MissingField(_) => ApiError::bad_request(error.to_string()),
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(error: PasswordError) -> Self {
        match error {
            PasswordError::Hashing(reason) => {
                tracing::error!(error = %reason, "password hashing failed");
                ApiError::internal()
            }
            other => ApiError::bad_request(other.to_string()),
        }
    }
}

pub async fn handle_teacher(
    State(state): State<AppState>,
    principal: Principal,
    body: Result<Json<CreateUserBody>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    register(state, principal, UserRole::Teacher, body).await
}

pub async fn handle_parent(
    State(state): State<AppState>,
    principal: Principal,
    body: Result<Json<CreateUserBody>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    register(state, principal, UserRole::Parent, body).await
}

pub async fn handle_admin(
    State(state): State<AppState>,
    principal: Principal,
    body: Result<Json<CreateUserBody>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    register(state, principal, UserRole::Admin, body).await
}

async fn register(
    state: AppState,
    principal: Principal,
    role: UserRole,
    body: Result<Json<CreateUserBody>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    principal.require_any(&[UserRole::Admin])?;
    let body = json_body(body)?;

    let email = required(&body.email, "email")?;
    let password = required(&body.password, "password")?;
    let first_name = required(&body.first_name, "firstName")?;
    let last_name = required(&body.last_name, "lastName")?;

    let email =
        EmailAddress::parse(email.trim()).map_err(|_| ApiError::bad_request("Invalid email format"))?;
    let password_hash = state.password_hasher.hash_checked(password).await?;

    let command = RegisterUser {
        user_id: UserId::new(),
        email,
        password_hash,
        role,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        registered_at: Utc::now().timestamp_millis(),
    };

    let user = state.register_user.handle(command).await?;
    tracing::info!(user_id = %user.user_id, role = %user.role, created_by = %principal.user_id, "user registered");

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}
