use axum::{Json, extract::State};

use crate::modules::identity::use_cases::register_user::inbound::http::UserResponse;
use crate::shared::auth::principal::Principal;
use crate::shared::core::primitives::UserRole;
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    principal.require_any(&[UserRole::Admin])?;
    let rows = state.list_users.list().await.map_err(|e| {
        tracing::error!(error = %e, "listing users failed");
        ApiError::internal()
    })?;
    Ok(Json(rows.into_iter().map(UserResponse::from).collect()))
}

/// Database check. Public, plain text.
pub async fn handle_count(State(state): State<AppState>) -> Result<String, ApiError> {
    let count = state.list_users.count().await.map_err(|e| {
        tracing::error!(error = %e, "counting users failed");
        ApiError::internal()
    })?;
    Ok(format!("User count: {count}"))
}

#[cfg(test)]
mod list_users_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    use super::*;
    use crate::tests::fixtures::app::{read_json, test_app};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/api/users", get(handle))
            .with_state(state)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_users_oldest_first() {
        let test_app = test_app();
        let token = test_app.admin_token().await;
        test_app.seed_user(UserRole::Teacher, "t@school.edu").await;
        test_app.seed_user(UserRole::Parent, "p@home.org").await;

        let response = app(test_app.state.clone())
            .oneshot(
                Request::get("/api/users")
                    .header("authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        let emails: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["email"].as_str().unwrap())
            .collect();
        assert_eq!(emails.len(), 3);
        assert_eq!(&emails[1..], &["t@school.edu", "p@home.org"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_the_user_count_as_text() {
        let test_app = test_app();
        test_app.seed_user(UserRole::Teacher, "t@school.edu").await;
        let router = Router::new()
            .route("/api/test/db", get(handle_count))
            .with_state(test_app.state.clone());

        let response = router
            .oneshot(Request::get("/api/test/db").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"User count: 1");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_403_for_a_parent() {
        let test_app = test_app();
        let parent = test_app.seed_user(UserRole::Parent, "p@home.org").await;
        let token = test_app.token_for(&parent);

        let response = app(test_app.state.clone())
            .oneshot(
                Request::get("/api/users")
                    .header("authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
