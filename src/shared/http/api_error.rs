use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Error rendered as `{"message": "..."}` with the matching status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl<Reason> From<ApplicationError<Reason>> for ApiError
where
    Reason: Into<ApiError>,
{
    fn from(error: ApplicationError<Reason>) -> Self {
        match error {
            ApplicationError::Domain(reason) => reason.into(),
            ApplicationError::EventStore(EventStoreError::VersionMismatch { expected, actual }) => {
                tracing::warn!(expected, actual, "concurrent modification rejected");
                ApiError::conflict("The resource was modified concurrently, please retry")
            }
            ApplicationError::EventStore(e) => {
                tracing::error!(error = %e, "event store failure");
                ApiError::internal()
            }
            ApplicationError::Outbox(e) => {
                tracing::error!(error = %e, "outbox failure");
                ApiError::internal()
            }
            ApplicationError::Projection(message) | ApplicationError::Unexpected(message) => {
                tracing::error!(error = %message, "request failed");
                ApiError::internal()
            }
        }
    }
}

/// Unwraps a JSON body, turning malformed payloads into a 422.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            rejection.body_text(),
        )),
    }
}

/// Rejects missing or blank required fields with the platform's wording.
pub fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, ApiError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::bad_request(format!(
            "Missing required field: {field}"
        ))),
    }
}

/// ISO `YYYY-MM-DD` request dates.
pub fn parse_date(value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::bad_request(format!("Invalid date format: {value}")))
}

#[cfg(test)]
mod api_error_tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;

    #[derive(Debug)]
    struct NotThere;

    impl From<NotThere> for ApiError {
        fn from(_: NotThere) -> Self {
            ApiError::not_found("Thing not found")
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_render_the_message_as_json() {
        let response = ApiError::conflict("taken").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "taken" }));
    }

    #[rstest]
    fn it_should_map_domain_rejections_through_the_reason() {
        let error: ApiError = ApplicationError::Domain(NotThere).into();
        assert_eq!(error, ApiError::not_found("Thing not found"));
    }

    #[rstest]
    fn it_should_map_version_mismatches_to_conflict() {
        let error: ApiError = ApplicationError::<NotThere>::EventStore(
            EventStoreError::VersionMismatch {
                expected: 1,
                actual: 2,
            },
        )
        .into();
        assert_eq!(error.status, StatusCode::CONFLICT);
    }

    #[rstest]
    fn it_should_hide_backend_failures() {
        let error: ApiError =
            ApplicationError::<NotThere>::EventStore(EventStoreError::Backend("down".into()))
                .into();
        assert_eq!(error, ApiError::internal());
    }

    #[rstest]
    #[case(None)]
    #[case(Some("   ".to_string()))]
    fn it_should_reject_missing_required_fields(#[case] value: Option<String>) {
        let error = required(&value, "email").unwrap_err();
        assert_eq!(error, ApiError::bad_request("Missing required field: email"));
    }

    #[rstest]
    fn it_should_pass_present_required_fields() {
        let value = Some("a@b.c".to_string());
        assert_eq!(required(&value, "email").unwrap(), "a@b.c");
    }

    #[rstest]
    fn it_should_parse_iso_dates_only() {
        assert_eq!(
            parse_date(" 2025-09-01 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
        );
        assert_eq!(
            parse_date("01/09/2025").unwrap_err().message,
            "Invalid date format: 01/09/2025"
        );
    }
}
