use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::classes::core::projections::ClassRow;
use crate::modules::classes::use_cases::get_class::inbound::http::load_class;
use crate::shared::auth::principal::Principal;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlClass {
    pub class_id: String,
    pub name: String,
    pub grade_level: String,
    pub academic_year: String,
    pub created_at: i64,
}

impl From<ClassRow> for GqlClass {
    fn from(row: ClassRow) -> Self {
        Self {
            class_id: row.class_id.to_string(),
            name: row.name,
            grade_level: row.grade_level.display(),
            academic_year: row.academic_year,
            created_at: row.created_at,
        }
    }
}

#[derive(Default)]
pub struct ClassQuery;

#[Object]
impl ClassQuery {
    async fn class(&self, context: &Context<'_>, id: String) -> GqlResult<GqlClass> {
        let state = context.data::<AppState>()?;
        let principal = context.data::<Principal>()?;
        Ok(load_class(state, principal, &id).await?.into())
    }
}
