use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::password_reset::core::reset_token::ResetToken;
use crate::modules::password_reset::use_cases::request_password_reset::command::RequestPasswordReset;
use crate::modules::password_reset::use_cases::request_password_reset::decide::DecideError;
use crate::shared::core::primitives::ResetTokenId;
use crate::shared::http::api_error::{ApiError, json_body};
use crate::shell::state::AppState;

pub const NEUTRAL_ACKNOWLEDGEMENT: &str =
    "If an account exists with this email, a password reset link will be sent.";

#[derive(Deserialize)]
pub struct PasswordResetRequestBody {
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PasswordResetResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl From<DecideError> for ApiError {
    fn from(error: DecideError) -> Self {
        tracing::error!(%error, "password reset request collided");
        ApiError::internal()
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<PasswordResetRequestBody>, JsonRejection>,
) -> Result<Json<PasswordResetResponse>, ApiError> {
    let body = json_body(body)?;
    let email = match body.email {
        Some(email) if !email.trim().is_empty() => email,
        _ => return Err(ApiError::bad_request("Email is required")),
    };

    let issued = state
        .request_password_reset
        .handle(RequestPasswordReset {
            token_id: ResetTokenId::new(),
            token: ResetToken::generate(),
            email,
            requested_at: Utc::now().timestamp_millis(),
        })
        .await?;
    if let Some(token) = &issued {
        tracing::info!(user_id = %token.user_id, token_id = %token.token_id, "password reset requested");
    }

    Ok(Json(PasswordResetResponse {
        message: NEUTRAL_ACKNOWLEDGEMENT.to_string(),
        token: issued
            .filter(|_| state.config.reset_token_expose)
            .map(|token| token.token.to_string()),
    }))
}
