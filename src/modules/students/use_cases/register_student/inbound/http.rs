use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::students::core::personal_info::StudentPersonalInfo;
use crate::modules::students::core::student_number::StudentNumber;
use crate::modules::students::use_cases::get_student::inbound::http::StudentResponse;
use crate::modules::students::use_cases::register_student::command::RegisterStudent;
use crate::modules::students::use_cases::register_student::decide::DecideError;
use crate::shared::auth::principal::Principal;
use crate::shared::core::grade_level::{GradeLevel, is_grade_token};
use crate::shared::core::primitives::{ClassId, StudentId, UserRole};
use crate::shared::http::api_error::{ApiError, json_body, parse_date};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateStudentBody {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub grade_level: Option<String>,
    pub class_id: Option<String>,
    pub student_number: Option<String>,
    pub enrollment_date: Option<String>,
}

impl From<DecideError> for ApiError {
    fn from(error: DecideError) -> Self {
        match error {
            DecideError::ClassNotFound(_) => ApiError::bad_request(error.to_string()),
            DecideError::AlreadyRegistered => ApiError::conflict(error.to_string()),
        }
    }
}

pub fn personal_info(
    first_name: Option<&str>,
    last_name: Option<&str>,
    date_of_birth: Option<&str>,
) -> Result<StudentPersonalInfo, ApiError> {
    let first_name = first_name.ok_or_else(|| ApiError::bad_request("First name is required"))?;
    let last_name = last_name.ok_or_else(|| ApiError::bad_request("Last name is required"))?;
    let date_of_birth =
        date_of_birth.ok_or_else(|| ApiError::bad_request("Date of birth is required"))?;
    StudentPersonalInfo::new(first_name, last_name, Some(parse_date(date_of_birth)?))
        .map_err(|e| ApiError::bad_request(e.to_string()))
}

pub fn grade_level(value: Option<&str>) -> Result<GradeLevel, ApiError> {
    let value = value.ok_or_else(|| ApiError::bad_request("Grade level is required"))?;
    if !is_grade_token(value) {
        return Err(ApiError::bad_request("Grade level must be K or 0-12"));
    }
    GradeLevel::parse(value).map_err(|e| ApiError::bad_request(e.to_string()))
}

fn command(body: CreateStudentBody) -> Result<RegisterStudent, ApiError> {
    let personal_info = personal_info(
        body.first_name.as_deref(),
        body.last_name.as_deref(),
        body.date_of_birth.as_deref(),
    )?;
    let grade_level = grade_level(body.grade_level.as_deref())?;
    let class_id = body
        .class_id
        .as_deref()
        .ok_or_else(|| ApiError::bad_request("Class ID is required"))?;
    let class_id =
        ClassId::parse(class_id).map_err(|_| ApiError::bad_request("Invalid class ID format"))?;
    let student_number = body
        .student_number
        .as_deref()
        .map(StudentNumber::parse)
        .transpose()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    let enrollment_date = match body.enrollment_date.as_deref() {
        Some(date) => parse_date(date)?,
        None => Utc::now().date_naive(),
    };

    Ok(RegisterStudent {
        student_id: StudentId::new(),
        personal_info,
        grade_level,
        class_id,
        student_number,
        enrollment_date,
        registered_at: Utc::now().timestamp_millis(),
    })
}

pub async fn handle(
    State(state): State<AppState>,
    principal: Principal,
    body: Result<Json<CreateStudentBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    principal.require_any(&[UserRole::Admin])?;
    let command = command(json_body(body)?)?;

    let student = state.register_student.handle(command).await?;
    tracing::info!(student_id = %student.student_id, class_id = %student.class_id, grade = %student.grade_level, "student registered");

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/api/students/{}", student.student_id))],
        Json(StudentResponse::from(&student)),
    )
        .into_response())
}
