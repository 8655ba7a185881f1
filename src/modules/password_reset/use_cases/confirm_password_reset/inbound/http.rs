use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::identity::core::password::{PasswordError, validate_password};
use crate::modules::password_reset::core::reset_token::ResetToken;
use crate::modules::password_reset::use_cases::confirm_password_reset::command::ConfirmPasswordReset;
use crate::modules::password_reset::use_cases::confirm_password_reset::decide::DecideError;
use crate::modules::password_reset::use_cases::request_password_reset::inbound::http::PasswordResetResponse;
use crate::shared::http::api_error::{ApiError, json_body};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PasswordResetConfirmBody {
    pub token: Option<String>,
    pub new_password: Option<String>,
}

impl From<DecideError> for ApiError {
    fn from(error: DecideError) -> Self {
        match error {
            DecideError::Password(password) => password.into(),
            other => ApiError::bad_request(other.to_string()),
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<PasswordResetConfirmBody>, JsonRejection>,
) -> Result<Json<PasswordResetResponse>, ApiError> {
    let body = json_body(body)?;
    let token = body
        .token
        .as_deref()
        .ok_or_else(|| ApiError::bad_request("Token is required"))?;
    let new_password = body
        .new_password
        .ok_or_else(|| ApiError::bad_request(PasswordError::Required.to_string()))?;
    validate_password(&new_password)?;
    let token = ResetToken::parse(token).map_err(|_| ApiError::bad_request("Invalid reset token"))?;

    let user_id = state
        .confirm_password_reset
        .handle(ConfirmPasswordReset {
            token,
            new_password,
            confirmed_at: Utc::now().timestamp_millis(),
        })
        .await
        .inspect_err(|e| tracing::info!(reason = %e, "password reset refused"))?;
    tracing::info!(%user_id, "password reset completed");

    Ok(Json(PasswordResetResponse {
        message: "Password has been reset successfully".to_string(),
        token: None,
    }))
}

#[cfg(test)]
mod confirm_password_reset_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::shared::core::primitives::UserRole;
    use crate::tests::fixtures::app::{TestApp, read_json, test_app};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/api/auth/password-reset/confirm", post(handle))
            .with_state(state)
    }

    fn request(body: &Value) -> Request<Body> {
        Request::post("/api/auth/password-reset/confirm")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[fixture]
    fn before_each() -> TestApp {
        test_app()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reset_once_then_refuse_the_spent_token(before_each: TestApp) {
        let user = before_each.seed_user(UserRole::Parent, "p@home.org").await;
        let token = before_each.reset_token_for(&user).await;
        let body = json!({ "token": token, "new_password": "fresh-password" });
        let router = app(before_each.state.clone());

        let first = router.clone().oneshot(request(&body)).await.unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(
            read_json(first).await["message"],
            "Password has been reset successfully"
        );

        let second = router.oneshot(request(&body)).await.unwrap();
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(second).await["message"],
            "Reset token has already been used"
        );
    }

    #[rstest]
    #[case(json!({ "new_password": "fresh-password" }), "Token is required")]
    #[case(json!({ "token": "abc" }), "Password is required")]
    #[case(json!({ "token": "abc", "new_password": "short" }), "Password must be at least 8 characters")]
    #[case(json!({ "token": "abc", "new_password": "fresh-password" }), "Invalid reset token")]
    #[case(json!({ "token": "  ", "new_password": "fresh-password" }), "Invalid reset token")]
    #[tokio::test]
    async fn it_should_return_400_for_invalid_input(
        before_each: TestApp,
        #[case] body: Value,
        #[case] message: &str,
    ) {
        let response = app(before_each.state.clone())
            .oneshot(request(&body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["message"], message);
    }
}
