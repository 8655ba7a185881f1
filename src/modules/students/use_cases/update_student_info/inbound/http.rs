use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::students::use_cases::get_student::inbound::http::{
    StudentResponse, parse_student_id,
};
use crate::modules::students::use_cases::register_student::inbound::http::personal_info;
use crate::modules::students::use_cases::update_student_info::command::UpdateStudentInfo;
use crate::modules::students::use_cases::update_student_info::decide::DecideError;
use crate::shared::auth::principal::Principal;
use crate::shared::core::primitives::UserRole;
use crate::shared::http::api_error::{ApiError, json_body};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateStudentBody {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
}

impl From<DecideError> for ApiError {
    fn from(error: DecideError) -> Self {
        match error {
            DecideError::NotFound => ApiError::not_found(error.to_string()),
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    principal: Principal,
    Path(student_id): Path<String>,
    body: Result<Json<UpdateStudentBody>, JsonRejection>,
) -> Result<Json<StudentResponse>, ApiError> {
    principal.require_any(&[UserRole::Admin])?;
    let student_id = parse_student_id(&student_id)?;
    let body = json_body(body)?;
    let personal_info = personal_info(
        body.first_name.as_deref(),
        body.last_name.as_deref(),
        body.date_of_birth.as_deref(),
    )?;

    let student = state
        .update_student_info
        .handle(UpdateStudentInfo {
            student_id,
            personal_info,
            updated_at: Utc::now().timestamp_millis(),
        })
        .await?;
    tracing::info!(%student_id, "student details updated");

    Ok(Json(StudentResponse::from(&student)))
}
