use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::identity::core::email_address::EmailAddress;
use crate::modules::identity::core::state::User;
use crate::modules::identity::use_cases::login::command::Login;
use crate::modules::identity::use_cases::login::decide::DecideError;
use crate::modules::identity::use_cases::register_user::inbound::http::UserResponse;
use crate::shared::auth::claims::TokenSubject;
use crate::shared::http::api_error::{ApiError, json_body};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

impl From<DecideError> for ApiError {
    fn from(error: DecideError) -> Self {
        ApiError::unauthorized(error.to_string())
    }
}

pub fn token_subject(user: &User) -> TokenSubject {
    TokenSubject {
        user_id: user.user_id,
        email: user.email.to_string(),
        role: user.role,
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<LoginBody>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let body = json_body(body)?;

    let email = match body.email.as_deref().map(str::trim) {
        Some(email) if !email.is_empty() => email.to_string(),
        _ => return Err(ApiError::bad_request("Email is required")),
    };
    let password = match body.password {
        Some(password) if !password.trim().is_empty() => password,
        _ => return Err(ApiError::bad_request("Password is required")),
    };
    if EmailAddress::parse(&email).is_err() {
        return Err(ApiError::bad_request("Invalid email format"));
    }

    let now = Utc::now();
    let user = state
        .login
        .handle(Login {
            email: email.clone(),
            password,
            logged_in_at: now.timestamp_millis(),
        })
        .await
        .inspect_err(|e| tracing::info!(email = %email, reason = %e, "login refused"))?;

    let token = state.tokens.issue(&token_subject(&user), now).map_err(|e| {
        tracing::error!(error = %e, "token signing failed");
        ApiError::internal()
    })?;
    tracing::info!(user_id = %user.user_id, "user logged in");

    Ok(Json(LoginResponse {
        token,
        user: UserResponse::from(&user),
    }))
}
