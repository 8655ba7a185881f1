// End to end in memory flow over the full router: an administrator sets up a class,
// staff and families, then teachers and parents read what they are entitled to.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::modules::classes::core::academic_year::AcademicYear;
use crate::shared::core::primitives::UserRole;
use crate::shell::bootstrap::seed_admin;
use crate::shell::config::BootstrapAdmin;
use crate::shell::http::router;
use crate::tests::fixtures::app::test_app;

async fn call(
    router: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        request = request.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn login(router: &Router, email: &str, password: &str) -> String {
    let (status, json) = call(
        router,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login for {email}: {json}");
    json["token"].as_str().unwrap().to_string()
}

async fn create_user(router: &Router, admin: &str, kind: &str, email: &str) -> String {
    let (status, json) = call(
        router,
        Method::POST,
        &format!("/api/users/{kind}"),
        Some(admin),
        Some(json!({
            "email": email,
            "password": "password123",
            "firstName": "Pat",
            "lastName": "Doe"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    json["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn it_should_run_a_school_year_end_to_end() {
    let app = test_app();
    seed_admin(
        &app.state,
        &BootstrapAdmin {
            email: "root@school.edu".into(),
            password: "bootstrap-secret".into(),
        },
    )
    .await
    .unwrap();
    let router = router(app.state.clone());
    let admin = login(&router, "root@school.edu", "bootstrap-secret").await;

    let teacher_id = create_user(&router, &admin, "teacher", "teacher@school.edu").await;
    let other_teacher_id = create_user(&router, &admin, "teacher", "other@school.edu").await;
    let parent_id = create_user(&router, &admin, "parent", "parent@home.org").await;
    assert!(!other_teacher_id.is_empty());

    let year = AcademicYear::current();
    let (status, class) = call(
        &router,
        Method::POST,
        "/api/classes",
        Some(&admin),
        Some(json!({ "name": "Room 4B", "grade_level": "4", "academic_year": year.as_str() })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let class_id = class["class_id"].as_str().unwrap().to_string();

    let (status, student) = call(
        &router,
        Method::POST,
        "/api/students",
        Some(&admin),
        Some(json!({
            "first_name": "Ada",
            "last_name": "Byron",
            "date_of_birth": "2016-02-01",
            "grade_level": "4",
            "class_id": class_id,
            "enrollment_date": "2025-09-01"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{student}");
    let student_id = student["student_id"].as_str().unwrap().to_string();

    let (status, _) = call(
        &router,
        Method::POST,
        "/api/teacher-class-assignments",
        Some(&admin),
        Some(json!({
            "teacher_id": teacher_id,
            "class_id": class_id,
            "role": "Homeroom Teacher"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, association) = call(
        &router,
        Method::POST,
        "/api/parent-student-associations",
        Some(&admin),
        Some(json!({
            "parent_id": parent_id,
            "student_id": student_id,
            "relationship_type": "Mother",
            "is_primary_contact": true
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(association["is_primary_contact"], true);

    let teacher = login(&router, "teacher@school.edu", "password123").await;
    let other_teacher = login(&router, "other@school.edu", "password123").await;
    let parent = login(&router, "parent@home.org", "password123").await;

    let student_path = format!("/api/students/{student_id}");
    let (status, _) = call(&router, Method::GET, &student_path, Some(&teacher), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call(&router, Method::GET, &student_path, Some(&parent), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call(&router, Method::GET, &student_path, Some(&other_teacher), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, roster) = call(
        &router,
        Method::GET,
        &format!("/api/students/class/{class_id}"),
        Some(&teacher),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(roster.as_array().unwrap().len(), 1);

    let (status, advanced) = call(
        &router,
        Method::POST,
        &format!("/api/students/{student_id}/advance"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(advanced["grade_level"], "5");

    let (status, links) = call(
        &router,
        Method::GET,
        &format!("/api/parent-student-associations/parent/{parent_id}"),
        Some(&parent),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(links[0]["student_id"], student_id.as_str());

    let (status, _) = call(
        &router,
        Method::POST,
        &format!("/api/users/{parent_id}/deactivate"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, json) = call(
        &router,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "parent@home.org", "password": "password123" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Account is deactivated");
}

#[tokio::test]
async fn it_should_refuse_admin_routes_to_other_roles() {
    let app = test_app();
    let teacher = app.seed_user(UserRole::Teacher, "t@school.edu").await;
    let token = app.token_for(&teacher);
    let router = router(app.state.clone());

    let (status, _) = call(&router, Method::GET, "/api/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call(&router, Method::GET, "/api/users", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
