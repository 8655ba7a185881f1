// Fully wired in-memory application for HTTP handler tests.

use axum::body::Body;
use axum::response::Response;
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;

use crate::modules::classes::adapters::outbound::projections::ClassQueries;
use crate::modules::classes::core::academic_year::AcademicYear;
use crate::modules::classes::core::state::SchoolClass;
use crate::modules::identity::core::events::UserEvent;
use crate::modules::identity::core::state::User;
use crate::modules::identity::use_cases::change_user_status::command::{
    ChangeUserStatus, UserStatus,
};
use crate::modules::identity::use_cases::login::inbound::http::token_subject;
use crate::modules::parent_links::core::state::ParentStudentAssociation;
use crate::modules::password_reset::core::reset_token::ResetToken;
use crate::modules::password_reset::use_cases::request_password_reset::command::RequestPasswordReset;
use crate::modules::students::core::state::Student;
use crate::modules::teacher_assignments::core::state::TeacherAssignment;
use crate::shared::core::grade_level::GradeLevel;
use crate::shared::core::primitives::{
    AssignmentId, AssociationId, ClassId, ResetTokenId, StudentId, UserId, UserRole,
};
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::mailer::in_memory::InMemoryMailer;
use crate::shell::config::AppConfig;
use crate::shell::state::{AppState, ReadModels, Stores};
use crate::tests::fixtures::commands::assign_teacher::AssignTeacherBuilder;
use crate::tests::fixtures::commands::associate_parent::AssociateParentBuilder;
use crate::tests::fixtures::commands::create_class::CreateClassBuilder;
use crate::tests::fixtures::commands::register_student::RegisterStudentBuilder;
use crate::tests::fixtures::commands::register_user::RegisterUserBuilder;

pub struct TestApp {
    pub state: AppState,
    pub read_models: ReadModels,
    pub mailer: Arc<InMemoryMailer>,
}

pub fn test_config() -> AppConfig {
    AppConfig {
        jwt_secret: "test-secret".into(),
        bcrypt_cost: 4,
        reset_token_expose: false,
        ..AppConfig::default()
    }
}

pub fn test_app() -> TestApp {
    TestApp::with_stores(Stores::in_memory())
}

pub async fn read_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn read_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

impl TestApp {
    pub fn with_stores(stores: Stores) -> Self {
        let read_models = ReadModels::new();
        let mailer = Arc::new(InMemoryMailer::new());
        let state = AppState::new(test_config(), &stores, &read_models, mailer.clone());
        Self {
            state,
            read_models,
            mailer,
        }
    }

    pub fn with_user_store(users: Arc<InMemoryEventStore<UserEvent>>) -> Self {
        let mut stores = Stores::in_memory();
        stores.users = users;
        Self::with_stores(stores)
    }

    pub async fn seed_user(&self, role: UserRole, email: &str) -> User {
        self.state
            .register_user
            .handle(
                RegisterUserBuilder::new()
                    .user_id(UserId::new())
                    .email(email)
                    .role(role)
                    .build(),
            )
            .await
            .unwrap()
    }

    pub fn token_for(&self, user: &User) -> String {
        self.state
            .tokens
            .issue(&token_subject(user), Utc::now())
            .unwrap()
    }

    pub async fn admin_token(&self) -> String {
        let email = format!("admin-{}@school.edu", UserId::new());
        let admin = self.seed_user(UserRole::Admin, &email).await;
        self.token_for(&admin)
    }

    pub async fn deactivate(&self, user_id: UserId) -> User {
        self.state
            .change_user_status
            .handle(ChangeUserStatus {
                user_id,
                status: UserStatus::Deactivated,
                changed_at: Utc::now().timestamp_millis(),
            })
            .await
            .unwrap()
    }

    pub async fn seed_class(&self, name: &str, grade: i64) -> SchoolClass {
        self.state
            .create_class
            .handle(
                CreateClassBuilder::new()
                    .class_id(ClassId::new())
                    .name(name)
                    .grade_level(GradeLevel::from_number(grade).unwrap())
                    .academic_year(AcademicYear::current())
                    .build(),
            )
            .await
            .unwrap()
    }

    pub async fn seed_student(&self, class_id: ClassId, first: &str, last: &str) -> Student {
        let class = self
            .state
            .classes
            .find_by_id(class_id)
            .await
            .unwrap()
            .expect("seed the class first");
        self.state
            .register_student
            .handle(
                RegisterStudentBuilder::new()
                    .student_id(StudentId::new())
                    .names(first, last)
                    .grade_level(class.grade_level)
                    .class_id(class_id)
                    .build(),
            )
            .await
            .unwrap()
    }

    pub async fn assign(&self, teacher_id: UserId, class_id: ClassId) -> TeacherAssignment {
        self.state
            .assign_teacher
            .handle(
                AssignTeacherBuilder::new()
                    .assignment_id(AssignmentId::new())
                    .teacher_id(teacher_id)
                    .class_id(class_id)
                    .build(),
            )
            .await
            .unwrap()
    }

    pub async fn link_parent(
        &self,
        parent_id: UserId,
        student_id: StudentId,
    ) -> ParentStudentAssociation {
        self.state
            .associate_parent
            .handle(
                AssociateParentBuilder::new()
                    .association_id(AssociationId::new())
                    .parent_id(parent_id)
                    .student_id(student_id)
                    .build(),
            )
            .await
            .unwrap()
    }

    /// Issues a reset token through the request flow and returns its value.
    pub async fn reset_token_for(&self, user: &User) -> String {
        let issued = self
            .state
            .request_password_reset
            .handle(RequestPasswordReset {
                token_id: ResetTokenId::new(),
                token: ResetToken::generate(),
                email: user.email.to_string(),
                requested_at: Utc::now().timestamp_millis(),
            })
            .await
            .unwrap()
            .expect("a registered user receives a token");
        issued.token.as_str().to_string()
    }
}
