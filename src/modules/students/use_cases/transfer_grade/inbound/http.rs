use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::students::use_cases::get_student::inbound::http::{
    StudentResponse, parse_student_id,
};
use crate::modules::students::use_cases::register_student::inbound::http::grade_level;
use crate::modules::students::use_cases::transfer_grade::command::TransferGrade;
use crate::modules::students::use_cases::transfer_grade::decide::DecideError;
use crate::shared::auth::principal::Principal;
use crate::shared::core::primitives::UserRole;
use crate::shared::http::api_error::{ApiError, json_body};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct TransferGradeBody {
    pub grade_level: Option<String>,
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
    body: Result<Json<TransferGradeBody>, JsonRejection>,
) -> Result<Json<StudentResponse>, ApiError> {
    principal.require_any(&[UserRole::Admin])?;
    let student_id = parse_student_id(&student_id)?;
    let body = json_body(body)?;
    let grade_level = grade_level(body.grade_level.as_deref())?;

    let student = state
        .transfer_grade
        .handle(TransferGrade {
            student_id,
            grade_level,
            transferred_at: Utc::now().timestamp_millis(),
        })
        .await?;
    tracing::info!(%student_id, grade = %student.grade_level, "student transferred");

    Ok(Json(StudentResponse::from(&student)))
}
