use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::classes::core::academic_year::AcademicYear;
use crate::modules::classes::core::class_name::{ClassName, MAX_CLASS_NAME_LENGTH};
use crate::modules::classes::use_cases::create_class::command::CreateClass;
use crate::modules::classes::use_cases::create_class::decide::DecideError;
use crate::modules::classes::use_cases::get_class::inbound::http::ClassResponse;
use crate::shared::auth::principal::Principal;
use crate::shared::core::grade_level::{GradeLevel, is_grade_token};
use crate::shared::core::primitives::{ClassId, UserRole};
use crate::shared::http::api_error::{ApiError, json_body};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateClassBody {
    pub name: Option<String>,
    pub grade_level: Option<String>,
    pub academic_year: Option<String>,
}

impl From<DecideError> for ApiError {
    fn from(error: DecideError) -> Self {
        ApiError::conflict(error.to_string())
    }
}

fn validate(body: &CreateClassBody) -> Result<(&str, &str, &str), ApiError> {
    let name = body
        .name
        .as_deref()
        .ok_or_else(|| ApiError::bad_request("Class name is required"))?;
    if name.chars().count() > MAX_CLASS_NAME_LENGTH {
        return Err(ApiError::bad_request("Class name cannot exceed 100 characters"));
    }
    let grade = body
        .grade_level
        .as_deref()
        .ok_or_else(|| ApiError::bad_request("Grade level is required"))?;
    if !is_grade_token(grade) {
        return Err(ApiError::bad_request("Grade level must be K or 0-12"));
    }
    let academic_year = body
        .academic_year
        .as_deref()
        .ok_or_else(|| ApiError::bad_request("Academic year is required"))?;
    Ok((name, grade, academic_year))
}

pub async fn handle(
    State(state): State<AppState>,
    principal: Principal,
    body: Result<Json<CreateClassBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    principal.require_any(&[UserRole::Admin])?;
    let body = json_body(body)?;
    let (name, grade, academic_year) = validate(&body)?;

    let command = CreateClass {
        class_id: ClassId::new(),
        name: ClassName::parse(name).map_err(|e| ApiError::bad_request(e.to_string()))?,
        grade_level: GradeLevel::parse(grade).map_err(|e| ApiError::bad_request(e.to_string()))?,
        academic_year: AcademicYear::parse(academic_year)
            .map_err(|e| ApiError::bad_request(e.to_string()))?,
        created_at: Utc::now().timestamp_millis(),
    };

    let class = state.create_class.handle(command).await?;
    tracing::info!(class_id = %class.class_id, name = %class.name, grade = %class.grade_level, "class created");

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/api/classes/{}", class.class_id))],
        Json(ClassResponse::from(&class)),
    )
        .into_response())
}

#[cfg(test)]
mod create_class_http_inbound_tests {
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
            .route("/api/classes", post(handle))
            .with_state(state)
    }

    fn request(token: &str, body: String) -> Request<Body> {
        Request::post("/api/classes")
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(body))
            .unwrap()
    }

    fn body(name: &str, grade: &str, year: &str) -> String {
        serde_json::json!({ "name": name, "grade_level": grade, "academic_year": year }).to_string()
    }

    #[fixture]
    fn before_each() -> TestApp {
        test_app()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_201_with_a_location(before_each: TestApp) {
        let token = before_each.admin_token().await;
        let year = AcademicYear::current();

        let response = app(before_each.state.clone())
            .oneshot(request(&token, body("  Kinder A ", "K", year.as_str())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let location = response.headers()[LOCATION].to_str().unwrap().to_string();
        let json = read_json(response).await;
        assert_eq!(location, format!("/api/classes/{}", json["class_id"].as_str().unwrap()));
        assert_eq!(json["name"], "Kinder A");
        assert_eq!(json["grade_level"], "K");
        assert_eq!(json["academic_year"], year.as_str());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_409_for_a_duplicate(before_each: TestApp) {
        let token = before_each.admin_token().await;
        let year = AcademicYear::current();
        let router = app(before_each.state.clone());
        router
            .clone()
            .oneshot(request(&token, body("Math", "5", year.as_str())))
            .await
            .unwrap();

        let response = router
            .oneshot(request(&token, body("Math", "5", year.as_str())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            read_json(response).await["message"],
            format!("Class with name 'Math' already exists for grade 5 in academic year {year}")
        );
    }

    #[rstest]
    #[case(r#"{"grade_level":"5","academic_year":"2025-2026"}"#, "Class name is required")]
    #[case(r#"{"name":"Math","academic_year":"2025-2026"}"#, "Grade level is required")]
    #[case(r#"{"name":"Math","grade_level":"13","academic_year":"2025-2026"}"#, "Grade level must be K or 0-12")]
    #[case(r#"{"name":"Math","grade_level":"5"}"#, "Academic year is required")]
    #[case(r#"{"name":"   ","grade_level":"5","academic_year":"2025-2026"}"#, "Class name cannot be null or blank")]
    #[case(r#"{"name":"Math","grade_level":"5","academic_year":"2025-2027"}"#, "Academic year must span consecutive years (e.g., 2024-2025)")]
    #[case(r#"{"name":"Math","grade_level":"5","academic_year":"1990-1991"}"#, "Academic year must be within ±2 years of current year")]
    #[tokio::test]
    async fn it_should_return_400_for_invalid_input(
        before_each: TestApp,
        #[case] raw: &str,
        #[case] message: &str,
    ) {
        let token = before_each.admin_token().await;

        let response = app(before_each.state.clone())
            .oneshot(request(&token, raw.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["message"], message);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_400_for_an_overlong_name(before_each: TestApp) {
        let token = before_each.admin_token().await;
        let year = AcademicYear::current();

        let response = app(before_each.state.clone())
            .oneshot(request(&token, body(&"x".repeat(101), "5", year.as_str())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await["message"],
            "Class name cannot exceed 100 characters"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_403_for_a_teacher(before_each: TestApp) {
        let teacher = before_each.seed_user(UserRole::Teacher, "t@school.edu").await;
        let token = before_each.token_for(&teacher);

        let response = app(before_each.state.clone())
            .oneshot(request(&token, body("Math", "5", AcademicYear::current().as_str())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
