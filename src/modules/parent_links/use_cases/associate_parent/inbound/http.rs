use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::parent_links::core::projections::AssociationRow;
use crate::modules::parent_links::core::relationship_type::RelationshipType;
use crate::modules::parent_links::core::state::ParentStudentAssociation;
use crate::modules::parent_links::use_cases::associate_parent::command::AssociateParent;
use crate::modules::parent_links::use_cases::associate_parent::decide::DecideError;
use crate::shared::auth::principal::Principal;
use crate::shared::core::primitives::{AssociationId, StudentId, UserId, UserRole};
use crate::shared::http::api_error::{ApiError, json_body};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateAssociationBody {
    pub parent_id: Option<String>,
    pub student_id: Option<String>,
    pub relationship_type: Option<String>,
    #[serde(default)]
    pub is_primary_contact: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationResponse {
    pub association_id: String,
    pub parent_id: String,
    pub student_id: String,
    pub relationship_type: String,
    pub is_primary_contact: bool,
}

impl From<&ParentStudentAssociation> for AssociationResponse {
    fn from(a: &ParentStudentAssociation) -> Self {
        Self {
            association_id: a.association_id.to_string(),
            parent_id: a.parent_id.to_string(),
            student_id: a.student_id.to_string(),
            relationship_type: a.relationship_type.to_string(),
            is_primary_contact: a.is_primary_contact,
        }
    }
}

impl From<AssociationRow> for AssociationResponse {
    fn from(row: AssociationRow) -> Self {
        Self {
            association_id: row.association_id.to_string(),
            parent_id: row.parent_id.to_string(),
            student_id: row.student_id.to_string(),
            relationship_type: row.relationship_type,
            is_primary_contact: row.is_primary_contact,
        }
    }
}

impl From<DecideError> for ApiError {
    fn from(error: DecideError) -> Self {
        match error {
            DecideError::AlreadyExists { .. } => ApiError::conflict(error.to_string()),
            DecideError::ParentNotFound(_)
            | DecideError::NotAParent(_)
            | DecideError::StudentNotFound(_) => ApiError::bad_request(error.to_string()),
        }
    }
}

fn command(body: CreateAssociationBody) -> Result<AssociateParent, ApiError> {
    let parent_id = body
        .parent_id
        .as_deref()
        .ok_or_else(|| ApiError::bad_request("Parent ID is required"))?;
    let student_id = body
        .student_id
        .as_deref()
        .ok_or_else(|| ApiError::bad_request("Student ID is required"))?;
    let relationship_type = body
        .relationship_type
        .as_deref()
        .ok_or_else(|| ApiError::bad_request("Relationship type is required"))?;

    Ok(AssociateParent {
        association_id: AssociationId::new(),
        parent_id: UserId::parse(parent_id)
            .map_err(|_| ApiError::bad_request("Invalid parent ID format"))?,
        student_id: StudentId::parse(student_id)
            .map_err(|_| ApiError::bad_request("Invalid student ID format"))?,
        relationship_type: RelationshipType::parse(relationship_type)
            .map_err(|e| ApiError::bad_request(e.to_string()))?,
        is_primary_contact: body.is_primary_contact,
        associated_at: Utc::now().timestamp_millis(),
    })
}

pub async fn handle(
    State(state): State<AppState>,
    principal: Principal,
    body: Result<Json<CreateAssociationBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    principal.require_any(&[UserRole::Admin])?;
    let command = command(json_body(body)?)?;

    let association = state.associate_parent.handle(command).await?;
    tracing::info!(
        association_id = %association.association_id,
        parent_id = %association.parent_id,
        student_id = %association.student_id,
        "parent linked to student"
    );

    Ok((
        StatusCode::CREATED,
        [(
            LOCATION,
            format!("/api/parent-student-associations/{}", association.association_id),
        )],
        Json(AssociationResponse::from(&association)),
    )
        .into_response())
}

#[cfg(test)]
mod associate_parent_http_inbound_tests {
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
            .route("/api/parent-student-associations", post(handle))
            .with_state(state)
    }

    fn request(token: &str, body: &Value) -> Request<Body> {
        Request::post("/api/parent-student-associations")
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
    async fn it_should_link_then_conflict(before_each: TestApp) {
        let token = before_each.admin_token().await;
        let parent = before_each.seed_user(UserRole::Parent, "p@home.org").await;
        let class = before_each.seed_class("Math", 2).await;
        let student = before_each.seed_student(class.class_id, "Ada", "Byron").await;
        let body = json!({
            "parent_id": parent.user_id.to_string(),
            "student_id": student.student_id.to_string(),
            "relationship_type": "Guardian",
            "is_primary_contact": true
        });
        let router = app(before_each.state.clone());

        let created = router.clone().oneshot(request(&token, &body)).await.unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        assert!(created.headers().contains_key(LOCATION));
        let json = read_json(created).await;
        assert_eq!(json["relationship_type"], "Guardian");
        assert_eq!(json["is_primary_contact"], true);

        let duplicate = router.oneshot(request(&token, &body)).await.unwrap();
        assert_eq!(duplicate.status(), StatusCode::CONFLICT);
        assert_eq!(
            read_json(duplicate).await["message"],
            format!(
                "Association already exists between parent {} and student {}",
                parent.user_id, student.student_id
            )
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_default_the_primary_contact_flag_to_false(before_each: TestApp) {
        let token = before_each.admin_token().await;
        let parent = before_each.seed_user(UserRole::Parent, "p@home.org").await;
        let class = before_each.seed_class("Math", 2).await;
        let student = before_each.seed_student(class.class_id, "Ada", "Byron").await;

        let response = app(before_each.state.clone())
            .oneshot(request(
                &token,
                &json!({
                    "parent_id": parent.user_id.to_string(),
                    "student_id": student.student_id.to_string(),
                    "relationship_type": "Father"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(read_json(response).await["is_primary_contact"], false);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_an_unknown_student(before_each: TestApp) {
        let token = before_each.admin_token().await;
        let parent = before_each.seed_user(UserRole::Parent, "p@home.org").await;
        let missing = StudentId::new();

        let response = app(before_each.state.clone())
            .oneshot(request(
                &token,
                &json!({
                    "parent_id": parent.user_id.to_string(),
                    "student_id": missing.to_string(),
                    "relationship_type": "Mother"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await["message"],
            format!("Student {missing} does not exist")
        );
    }

    #[rstest]
    #[case(json!({ "student_id": "x", "relationship_type": "r" }), "Parent ID is required")]
    #[case(json!({ "parent_id": "x", "relationship_type": "r" }), "Student ID is required")]
    #[case(json!({ "parent_id": "x", "student_id": "y" }), "Relationship type is required")]
    #[case(json!({ "parent_id": "x", "student_id": "y", "relationship_type": "r" }), "Invalid parent ID format")]
    #[tokio::test]
    async fn it_should_validate_the_body(
        before_each: TestApp,
        #[case] body: Value,
        #[case] message: &str,
    ) {
        let token = before_each.admin_token().await;

        let response = app(before_each.state.clone())
            .oneshot(request(&token, &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["message"], message);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_forbid_parents(before_each: TestApp) {
        let parent = before_each.seed_user(UserRole::Parent, "p@home.org").await;
        let token = before_each.token_for(&parent);

        let response = app(before_each.state.clone())
            .oneshot(request(&token, &json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
