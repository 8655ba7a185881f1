// Forgotten password over the full router: the token only ever travels by mail.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::modules::password_reset::adapters::outbound::mailer::RESET_MAIL_SUBJECT;
use crate::modules::password_reset::use_cases::request_password_reset::inbound::http::NEUTRAL_ACKNOWLEDGEMENT;
use crate::shared::core::primitives::UserRole;
use crate::shell::http::router;
use crate::tests::fixtures::app::{TestApp, test_app};

async fn post(router: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn last_mailed_token(app: &TestApp) -> String {
    let sent = app.mailer.sent().await;
    let mail = sent.last().expect("a reset mail");
    assert_eq!(mail.subject, RESET_MAIL_SUBJECT);
    mail.body
        .lines()
        .find_map(|line| line.strip_prefix("Reset token: "))
        .expect("token line in mail body")
        .trim()
        .to_string()
}

async fn request_reset(router: &Router, email: &str) {
    let (status, json) = post(
        router,
        "/api/auth/password-reset/request",
        json!({ "email": email }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], NEUTRAL_ACKNOWLEDGEMENT);
    assert!(json.get("token").is_none());
}

async fn login_status(router: &Router, email: &str, password: &str) -> StatusCode {
    post(
        router,
        "/api/auth/login",
        json!({ "email": email, "password": password }),
    )
    .await
    .0
}

#[tokio::test]
async fn it_should_reset_a_forgotten_password_once() {
    let app = test_app();
    app.seed_user(UserRole::Parent, "parent@home.org").await;
    let router = router(app.state.clone());

    request_reset(&router, "parent@home.org").await;
    let token = last_mailed_token(&app).await;

    let (status, json) = post(
        &router,
        "/api/auth/password-reset/confirm",
        json!({ "token": token, "new_password": "brand-new-secret" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{json}");
    assert_eq!(json["message"], "Password has been reset successfully");

    assert_eq!(
        login_status(&router, "parent@home.org", "brand-new-secret").await,
        StatusCode::OK
    );
    assert_eq!(
        login_status(&router, "parent@home.org", "password123").await,
        StatusCode::UNAUTHORIZED
    );

    let (status, json) = post(
        &router,
        "/api/auth/password-reset/confirm",
        json!({ "token": token, "new_password": "another-secret" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Reset token has already been used");
}

#[tokio::test]
async fn it_should_only_honour_the_latest_token() {
    let app = test_app();
    app.seed_user(UserRole::Teacher, "teacher@school.edu").await;
    let router = router(app.state.clone());

    request_reset(&router, "teacher@school.edu").await;
    let first = last_mailed_token(&app).await;
    request_reset(&router, "teacher@school.edu").await;
    let second = last_mailed_token(&app).await;
    assert_ne!(first, second);

    let (status, _) = post(
        &router,
        "/api/auth/password-reset/confirm",
        json!({ "token": first, "new_password": "brand-new-secret" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        &router,
        "/api/auth/password-reset/confirm",
        json!({ "token": second, "new_password": "brand-new-secret" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn it_should_not_mail_unknown_addresses() {
    let app = test_app();
    let router = router(app.state.clone());

    request_reset(&router, "ghost@home.org").await;

    assert!(app.mailer.sent().await.is_empty());
}
