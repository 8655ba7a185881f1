use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::modules::classes::core::projections::ClassRow;
use crate::modules::classes::use_cases::get_class::inbound::http::ClassResponse;
use crate::shared::auth::principal::Principal;
use crate::shared::core::grade_level::GradeLevel;
use crate::shared::core::primitives::UserRole;
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct ListClassesParams {
    pub academic_year: Option<String>,
}

pub async fn list_classes(
    state: &AppState,
    principal: &Principal,
    grade: &str,
    academic_year: Option<&str>,
) -> Result<Vec<ClassRow>, ApiError> {
    principal.require_any(&[UserRole::Admin, UserRole::Teacher])?;
    let grade_level = GradeLevel::parse(grade).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let academic_year = academic_year.map(str::trim).filter(|year| !year.is_empty());
    state
        .classes
        .list_by_grade(grade_level, academic_year)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "listing classes failed");
            ApiError::internal()
        })
}

pub async fn handle(
    State(state): State<AppState>,
    principal: Principal,
    Path(grade): Path<String>,
    Query(params): Query<ListClassesParams>,
) -> Result<Json<Vec<ClassResponse>>, ApiError> {
    let rows = list_classes(&state, &principal, &grade, params.academic_year.as_deref()).await?;
    Ok(Json(rows.into_iter().map(ClassResponse::from).collect()))
}
