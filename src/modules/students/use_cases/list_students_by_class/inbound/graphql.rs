use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::students::use_cases::get_student::inbound::graphql::GqlStudent;
use crate::modules::students::use_cases::list_students_by_class::inbound::http::list_students;
use crate::shared::auth::principal::Principal;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct StudentsByClassQuery;

#[Object]
impl StudentsByClassQuery {
    async fn students_by_class(
        &self,
        context: &Context<'_>,
        class_id: String,
    ) -> GqlResult<Vec<GqlStudent>> {
        let state = context.data::<AppState>()?;
        let principal = context.data::<Principal>()?;
        let rows = list_students(state, principal, &class_id).await?;
        Ok(rows.into_iter().map(GqlStudent::from).collect())
    }
}
