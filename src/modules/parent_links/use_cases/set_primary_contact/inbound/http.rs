use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::parent_links::use_cases::associate_parent::inbound::http::AssociationResponse;
use crate::modules::parent_links::use_cases::set_primary_contact::command::SetPrimaryContact;
use crate::modules::parent_links::use_cases::set_primary_contact::decide::DecideError;
use crate::shared::auth::principal::Principal;
use crate::shared::core::primitives::{AssociationId, UserRole};
use crate::shared::http::api_error::{ApiError, json_body};
use crate::shell::state::AppState;

fn primary() -> bool {
    true
}

#[derive(Deserialize)]
pub struct PrimaryContactBody {
    #[serde(default = "primary")]
    pub is_primary_contact: bool,
}

impl From<DecideError> for ApiError {
    fn from(error: DecideError) -> Self {
        ApiError::not_found(error.to_string())
    }
}

pub async fn handle(
    State(state): State<AppState>,
    principal: Principal,
    Path(association_id): Path<String>,
    body: Result<Json<PrimaryContactBody>, JsonRejection>,
) -> Result<Json<AssociationResponse>, ApiError> {
    principal.require_any(&[UserRole::Admin])?;
    let association_id = AssociationId::parse(&association_id)
        .map_err(|_| ApiError::bad_request("Invalid association ID format"))?;
    let body = json_body(body)?;

    let association = state
        .set_primary_contact
        .handle(SetPrimaryContact {
            association_id,
            is_primary_contact: body.is_primary_contact,
            changed_at: Utc::now().timestamp_millis(),
        })
        .await?;
    tracing::info!(
        %association_id,
        is_primary_contact = association.is_primary_contact,
        "primary contact updated"
    );

    Ok(Json(AssociationResponse::from(&association)))
}

#[cfg(test)]
mod set_primary_contact_http_inbound_tests {
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
    use crate::tests::fixtures::app::{TestApp, read_json, test_app};

    fn app(state: AppState) -> Router {
        Router::new()
            .route(
                "/api/parent-student-associations/{id}/primary-contact",
                post(handle),
            )
            .with_state(state)
    }

    fn request(path: String, token: &str, body: &Value) -> Request<Body> {
        Request::post(path)
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[fixture]
    fn before_each() -> TestApp {
        test_app()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_toggle_the_flag(before_each: TestApp) {
        let token = before_each.admin_token().await;
        let parent = before_each.seed_user(UserRole::Parent, "p@home.org").await;
        let class = before_each.seed_class("Math", 2).await;
        let student = before_each.seed_student(class.class_id, "Ada", "Byron").await;
        let association = before_each.link_parent(parent.user_id, student.student_id).await;
        let router = app(before_each.state.clone());
        let path = format!(
            "/api/parent-student-associations/{}/primary-contact",
            association.association_id
        );

        let on = router
            .clone()
            .oneshot(request(path.clone(), &token, &json!({})))
            .await
            .unwrap();
        assert_eq!(on.status(), StatusCode::OK);
        assert_eq!(read_json(on).await["is_primary_contact"], true);

        let off = router
            .oneshot(request(path, &token, &json!({ "is_primary_contact": false })))
            .await
            .unwrap();
        assert_eq!(read_json(off).await["is_primary_contact"], false);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_association(before_each: TestApp) {
        let token = before_each.admin_token().await;

        let response = app(before_each.state.clone())
            .oneshot(request(
                format!(
                    "/api/parent-student-associations/{}/primary-contact",
                    AssociationId::new()
                ),
                &token,
                &json!({ "is_primary_contact": true }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_json(response).await["message"], "Association not found");
    }
}
