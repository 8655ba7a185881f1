use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::teacher_assignments::core::projections::AssignmentRow;
use crate::modules::teacher_assignments::core::state::TeacherAssignment;
use crate::modules::teacher_assignments::core::teacher_role::TeacherRole;
use crate::modules::teacher_assignments::use_cases::assign_teacher::command::AssignTeacher;
use crate::modules::teacher_assignments::use_cases::assign_teacher::decide::DecideError;
use crate::shared::auth::principal::Principal;
use crate::shared::core::primitives::{AssignmentId, ClassId, UserId, UserRole};
use crate::shared::http::api_error::{ApiError, json_body, parse_date};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateAssignmentBody {
    pub teacher_id: Option<String>,
    pub class_id: Option<String>,
    pub role: Option<String>,
    pub assigned_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentResponse {
    pub assignment_id: String,
    pub teacher_id: String,
    pub class_id: String,
    pub role: String,
    pub assigned_date: String,
}

impl From<&TeacherAssignment> for AssignmentResponse {
    fn from(a: &TeacherAssignment) -> Self {
        Self {
            assignment_id: a.assignment_id.to_string(),
            teacher_id: a.teacher_id.to_string(),
            class_id: a.class_id.to_string(),
            role: a.role.to_string(),
            assigned_date: a.assigned_date.to_string(),
        }
    }
}

impl From<AssignmentRow> for AssignmentResponse {
    fn from(row: AssignmentRow) -> Self {
        Self {
            assignment_id: row.assignment_id.to_string(),
            teacher_id: row.teacher_id.to_string(),
            class_id: row.class_id.to_string(),
            role: row.role,
            assigned_date: row.assigned_date.to_string(),
        }
    }
}

impl From<DecideError> for ApiError {
    fn from(error: DecideError) -> Self {
        match error {
            DecideError::AlreadyExists { .. } => ApiError::conflict(error.to_string()),
            DecideError::TeacherNotFound(_)
            | DecideError::NotATeacher(_)
            | DecideError::ClassNotFound(_) => ApiError::bad_request(error.to_string()),
        }
    }
}

fn command(body: CreateAssignmentBody) -> Result<AssignTeacher, ApiError> {
    let teacher_id = body
        .teacher_id
        .as_deref()
        .ok_or_else(|| ApiError::bad_request("Teacher ID is required"))?;
    let class_id = body
        .class_id
        .as_deref()
        .ok_or_else(|| ApiError::bad_request("Class ID is required"))?;
    let role = body
        .role
        .as_deref()
        .ok_or_else(|| ApiError::bad_request("Role is required"))?;

    Ok(AssignTeacher {
        assignment_id: AssignmentId::new(),
        teacher_id: UserId::parse(teacher_id)
            .map_err(|_| ApiError::bad_request("Invalid teacher ID format"))?,
        class_id: ClassId::parse(class_id)
            .map_err(|_| ApiError::bad_request("Invalid class ID format"))?,
        role: TeacherRole::parse(role).map_err(|e| ApiError::bad_request(e.to_string()))?,
        assigned_date: match body.assigned_date.as_deref() {
            Some(date) => parse_date(date)?,
            None => Utc::now().date_naive(),
        },
        assigned_at: Utc::now().timestamp_millis(),
    })
}

pub async fn handle(
    State(state): State<AppState>,
    principal: Principal,
    body: Result<Json<CreateAssignmentBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    principal.require_any(&[UserRole::Admin])?;
    let command = command(json_body(body)?)?;

    let assignment = state.assign_teacher.handle(command).await?;
    tracing::info!(
        assignment_id = %assignment.assignment_id,
        teacher_id = %assignment.teacher_id,
        class_id = %assignment.class_id,
        "teacher assigned to class"
    );

    Ok((
        StatusCode::CREATED,
        [(
            LOCATION,
            format!("/api/teacher-class-assignments/{}", assignment.assignment_id),
        )],
        Json(AssignmentResponse::from(&assignment)),
    )
        .into_response())
}
