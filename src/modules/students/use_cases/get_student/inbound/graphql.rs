use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::NaiveDate;

use crate::modules::students::core::projections::StudentRow;
use crate::modules::students::use_cases::get_student::inbound::http::load_student;
use crate::shared::auth::principal::Principal;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlStudent {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub grade_level: String,
    pub class_id: String,
    pub student_number: Option<String>,
    pub enrollment_date: NaiveDate,
}

impl From<StudentRow> for GqlStudent {
    fn from(row: StudentRow) -> Self {
        Self {
            student_id: row.student_id.to_string(),
            first_name: row.first_name,
            last_name: row.last_name,
            date_of_birth: row.date_of_birth,
            grade_level: row.grade_level.display(),
            class_id: row.class_id.to_string(),
            student_number: row.student_number,
            enrollment_date: row.enrollment_date,
        }
    }
}

#[derive(Default)]
pub struct StudentQuery;

#[Object]
impl StudentQuery {
    async fn student(&self, context: &Context<'_>, id: String) -> GqlResult<GqlStudent> {
        let state = context.data::<AppState>()?;
        let principal = context.data::<Principal>()?;
        Ok(load_student(state, principal, &id).await?.into())
    }
}
