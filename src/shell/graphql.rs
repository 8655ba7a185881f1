use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use axum::response::Html;

use crate::modules::classes::use_cases::get_class::inbound::graphql::ClassQuery;
use crate::modules::classes::use_cases::list_classes_by_grade::inbound::graphql::ClassesByGradeQuery;
use crate::modules::students::use_cases::get_student::inbound::graphql::StudentQuery;
use crate::modules::students::use_cases::list_students_by_class::inbound::graphql::StudentsByClassQuery;
use crate::shared::auth::principal::Principal;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    ClassQuery,
    ClassesByGradeQuery,
    StudentQuery,
    StudentsByClassQuery,
);

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(state)
        .finish()
}

/// Resolvers read the caller from the request data and apply the same access rules as REST.
pub async fn handle(
    Extension(schema): Extension<AppSchema>,
    principal: Principal,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema
        .execute(request.into_inner().data(principal))
        .await
        .into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
