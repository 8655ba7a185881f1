use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;

use crate::modules::students::use_cases::advance_grade::command::AdvanceGrade;
use crate::modules::students::use_cases::advance_grade::decide::DecideError;
use crate::modules::students::use_cases::get_student::inbound::http::{
    StudentResponse, parse_student_id,
};
use crate::shared::auth::principal::Principal;
use crate::shared::core::primitives::UserRole;
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

impl From<DecideError> for ApiError {
    fn from(error: DecideError) -> Self {
        match error {
            DecideError::NotFound => ApiError::not_found(error.to_string()),
            DecideError::Grade(_) => ApiError::bad_request(error.to_string()),
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    principal: Principal,
    Path(student_id): Path<String>,
) -> Result<Json<StudentResponse>, ApiError> {
    principal.require_any(&[UserRole::Admin])?;
    let student_id = parse_student_id(&student_id)?;

    let student = state
        .advance_grade
        .handle(AdvanceGrade {
            student_id,
            advanced_at: Utc::now().timestamp_millis(),
        })
        .await?;
    tracing::info!(%student_id, grade = %student.grade_level, "student advanced");

    Ok(Json(StudentResponse::from(&student)))
}

#[cfg(test)]
mod advance_grade_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use rstest::{fixture, rstest};
    use tower::ServiceExt;

    use super::*;
    use crate::tests::fixtures::app::{TestApp, read_json, test_app};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/api/students/{id}/advance", post(handle))
            .with_state(state)
    }

    fn request(path: String, token: &str) -> Request<Body> {
        Request::post(path)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap()
    }

    #[fixture]
    fn before_each() -> TestApp {
        test_app()
    }

    #[rstest]
    #[case(0, StatusCode::OK, "1")]
    #[case(11, StatusCode::OK, "12")]
    #[tokio::test]
    async fn it_should_advance_one_grade(
        before_each: TestApp,
        #[case] grade: i64,
        #[case] status: StatusCode,
        #[case] expected: &str,
    ) {
        let token = before_each.admin_token().await;
        let class = before_each.seed_class("Math", grade).await;
        let student = before_each.seed_student(class.class_id, "Ada", "Byron").await;

        let response = app(before_each.state.clone())
            .oneshot(request(format!("/api/students/{}/advance", student.student_id), &token))
            .await
            .unwrap();

        assert_eq!(response.status(), status);
        assert_eq!(read_json(response).await["grade_level"], expected);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_400_past_grade_twelve(before_each: TestApp) {
        let token = before_each.admin_token().await;
        let class = before_each.seed_class("Senior Seminar", 12).await;
        let student = before_each.seed_student(class.class_id, "Ada", "Byron").await;

        let response = app(before_each.state.clone())
            .oneshot(request(format!("/api/students/{}/advance", student.student_id), &token))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await["message"],
            "Cannot advance beyond grade 12"
        );
    }
}
