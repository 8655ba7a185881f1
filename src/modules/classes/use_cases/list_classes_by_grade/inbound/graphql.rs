use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::classes::use_cases::get_class::inbound::graphql::GqlClass;
use crate::modules::classes::use_cases::list_classes_by_grade::inbound::http::list_classes;
use crate::shared::auth::principal::Principal;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ClassesByGradeQuery;

#[Object]
impl ClassesByGradeQuery {
    async fn classes_by_grade(
        &self,
        context: &Context<'_>,
        grade: String,
        academic_year: Option<String>,
    ) -> GqlResult<Vec<GqlClass>> {
        let state = context.data::<AppState>()?;
        let principal = context.data::<Principal>()?;
        let rows = list_classes(state, principal, &grade, academic_year.as_deref()).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
