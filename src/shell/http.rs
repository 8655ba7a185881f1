use axum::{
    Extension, Json, Router,
    routing::{delete, get, post},
};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::classes::use_cases::create_class::inbound::http as create_class_http;
use crate::modules::classes::use_cases::get_class::inbound::http as get_class_http;
use crate::modules::classes::use_cases::list_classes_by_grade::inbound::http as list_classes_http;
use crate::modules::identity::use_cases::change_user_status::inbound::http as user_status_http;
use crate::modules::identity::use_cases::list_users::inbound::http as list_users_http;
use crate::modules::identity::use_cases::login::inbound::http as login_http;
use crate::modules::identity::use_cases::register_user::inbound::http as register_user_http;
use crate::modules::parent_links::use_cases::associate_parent::inbound::http as associate_http;
use crate::modules::parent_links::use_cases::dissociate_parent::inbound::http as dissociate_http;
use crate::modules::parent_links::use_cases::list_associations::inbound::http as list_associations_http;
use crate::modules::parent_links::use_cases::set_primary_contact::inbound::http as primary_contact_http;
use crate::modules::password_reset::use_cases::confirm_password_reset::inbound::http as confirm_reset_http;
use crate::modules::password_reset::use_cases::request_password_reset::inbound::http as request_reset_http;
use crate::modules::students::use_cases::advance_grade::inbound::http as advance_grade_http;
use crate::modules::students::use_cases::get_student::inbound::http as get_student_http;
use crate::modules::students::use_cases::list_students_by_class::inbound::http as list_students_http;
use crate::modules::students::use_cases::register_student::inbound::http as register_student_http;
use crate::modules::students::use_cases::transfer_grade::inbound::http as transfer_grade_http;
use crate::modules::students::use_cases::update_student_info::inbound::http as update_student_http;
use crate::modules::teacher_assignments::use_cases::assign_teacher::inbound::http as assign_http;
use crate::modules::teacher_assignments::use_cases::list_assignments::inbound::http as list_assignments_http;
use crate::modules::teacher_assignments::use_cases::unassign_teacher::inbound::http as unassign_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router(state: AppState) -> Router {
    let schema = graphql::build_schema(state.clone());

    Router::new()
        .route("/health", get(health))
        // identity
        .route("/api/auth/login", post(login_http::handle))
        .route(
            "/api/auth/password-reset/request",
            post(request_reset_http::handle),
        )
        .route(
            "/api/auth/password-reset/confirm",
            post(confirm_reset_http::handle),
        )
        .route("/api/users", get(list_users_http::handle))
        .route("/api/users/teacher", post(register_user_http::handle_teacher))
        .route("/api/users/parent", post(register_user_http::handle_parent))
        .route("/api/users/admin", post(register_user_http::handle_admin))
        .route(
            "/api/users/{id}/deactivate",
            post(user_status_http::handle_deactivate),
        )
        .route("/api/users/{id}/activate", post(user_status_http::handle_activate))
        .route("/api/test/db", get(list_users_http::handle_count))
        // classes
        .route("/api/classes", post(create_class_http::handle))
        .route("/api/classes/{id}", get(get_class_http::handle))
        .route("/api/classes/grade/{grade}", get(list_classes_http::handle))
        // students
        .route("/api/students", post(register_student_http::handle))
        .route(
            "/api/students/{id}",
            get(get_student_http::handle).put(update_student_http::handle),
        )
        .route("/api/students/{id}/transfer", post(transfer_grade_http::handle))
        .route("/api/students/{id}/advance", post(advance_grade_http::handle))
        .route("/api/students/class/{id}", get(list_students_http::handle))
        // teacher assignments
        .route("/api/teacher-class-assignments", post(assign_http::handle))
        .route(
            "/api/teacher-class-assignments/{id}",
            delete(unassign_http::handle),
        )
        .route(
            "/api/teacher-class-assignments/teacher/{id}",
            get(list_assignments_http::handle_by_teacher),
        )
        .route(
            "/api/teacher-class-assignments/class/{id}",
            get(list_assignments_http::handle_by_class),
        )
        // parent links
        .route("/api/parent-student-associations", post(associate_http::handle))
        .route(
            "/api/parent-student-associations/{id}",
            delete(dissociate_http::handle),
        )
        .route(
            "/api/parent-student-associations/{id}/primary-contact",
            post(primary_contact_http::handle),
        )
        .route(
            "/api/parent-student-associations/parent/{id}",
            get(list_associations_http::handle_by_parent),
        )
        .route(
            "/api/parent-student-associations/student/{id}",
            get(list_associations_http::handle_by_student),
        )
        .route("/gql", get(graphql::graphiql).post(graphql::handle))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
