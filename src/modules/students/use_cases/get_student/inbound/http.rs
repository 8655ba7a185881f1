use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::modules::students::core::projections::StudentRow;
use crate::modules::students::core::state::Student;
use crate::shared::auth::principal::Principal;
use crate::shared::core::primitives::{StudentId, UserRole};
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentResponse {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<String>,
    pub grade_level: String,
    pub class_id: String,
    pub student_number: Option<String>,
    pub enrollment_date: String,
}

impl From<&Student> for StudentResponse {
    fn from(student: &Student) -> Self {
        Self {
            student_id: student.student_id.to_string(),
            first_name: student.personal_info.first_name.clone(),
            last_name: student.personal_info.last_name.clone(),
            date_of_birth: student.personal_info.date_of_birth.map(|d| d.to_string()),
            grade_level: student.grade_level.display(),
            class_id: student.class_id.to_string(),
            student_number: student.student_number.as_ref().map(|n| n.to_string()),
            enrollment_date: student.enrollment_date.to_string(),
        }
    }
}

impl From<StudentRow> for StudentResponse {
    fn from(row: StudentRow) -> Self {
        Self {
            student_id: row.student_id.to_string(),
            first_name: row.first_name,
            last_name: row.last_name,
            date_of_birth: row.date_of_birth.map(|d| d.to_string()),
            grade_level: row.grade_level.display(),
            class_id: row.class_id.to_string(),
            student_number: row.student_number,
            enrollment_date: row.enrollment_date.to_string(),
        }
    }
}

pub fn parse_student_id(raw: &str) -> Result<StudentId, ApiError> {
    StudentId::parse(raw).map_err(|_| ApiError::bad_request("Invalid student ID format"))
}

pub async fn load_student(
    state: &AppState,
    principal: &Principal,
    raw_id: &str,
) -> Result<StudentRow, ApiError> {
    principal.require_any(&[UserRole::Admin, UserRole::Teacher, UserRole::Parent])?;
    let student_id = parse_student_id(raw_id)?;
    state.access.ensure_student(principal, student_id).await?;
    state
        .students
        .find_by_id(student_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "student lookup failed");
            ApiError::internal()
        })?
        .ok_or_else(|| ApiError::not_found("Student not found"))
}

pub async fn handle(
    State(state): State<AppState>,
    principal: Principal,
    Path(student_id): Path<String>,
) -> Result<Json<StudentResponse>, ApiError> {
    let row = load_student(&state, &principal, &student_id).await?;
    Ok(Json(StudentResponse::from(row)))
}
