use axum::extract::FromRef;
use chrono::Duration;
use sqlx::PgPool;
use std::sync::Arc;

use crate::modules::access_control::guard::AccessGuard;
use crate::modules::classes::adapters::outbound::projections::ClassQueries;
use crate::modules::classes::adapters::outbound::projections_in_memory::InMemoryClassProjections;
use crate::modules::classes::core::events::ClassEvent;
use crate::modules::classes::core::evolve::evolve as evolve_class;
use crate::modules::classes::use_cases::create_class::handler::CreateClassHandler;
use crate::modules::identity::adapters::outbound::projections::UserQueries;
use crate::modules::identity::adapters::outbound::projections_in_memory::InMemoryUserProjections;
use crate::modules::identity::core::events::UserEvent;
use crate::modules::identity::core::evolve::evolve as evolve_user;
use crate::modules::identity::core::password::PasswordHasher;
use crate::modules::identity::use_cases::change_password::handler::ChangePasswordHandler;
use crate::modules::identity::use_cases::change_user_status::handler::ChangeUserStatusHandler;
use crate::modules::identity::use_cases::list_users::handler::ListUsersHandler;
use crate::modules::identity::use_cases::login::handler::LoginHandler;
use crate::modules::identity::use_cases::register_user::handler::RegisterUserHandler;
use crate::modules::parent_links::adapters::outbound::projections::AssociationQueries;
use crate::modules::parent_links::adapters::outbound::projections_in_memory::InMemoryAssociationProjections;
use crate::modules::parent_links::core::events::AssociationEvent;
use crate::modules::parent_links::core::evolve::evolve as evolve_association;
use crate::modules::parent_links::use_cases::associate_parent::handler::AssociateParentHandler;
use crate::modules::parent_links::use_cases::dissociate_parent::handler::DissociateParentHandler;
use crate::modules::parent_links::use_cases::set_primary_contact::handler::SetPrimaryContactHandler;
use crate::modules::password_reset::adapters::outbound::projections_in_memory::InMemoryResetTokenProjections;
use crate::modules::password_reset::core::events::ResetTokenEvent;
use crate::modules::password_reset::core::evolve::evolve as evolve_reset_token;
use crate::modules::password_reset::use_cases::confirm_password_reset::handler::ConfirmPasswordResetHandler;
use crate::modules::password_reset::use_cases::purge_expired_tokens::handler::PurgeExpiredTokensHandler;
use crate::modules::password_reset::use_cases::request_password_reset::handler::{
    RequestPasswordResetHandler, ResetSettings,
};
use crate::modules::students::adapters::outbound::projections::StudentQueries;
use crate::modules::students::adapters::outbound::projections_in_memory::InMemoryStudentProjections;
use crate::modules::students::core::events::StudentEvent;
use crate::modules::students::core::evolve::evolve as evolve_student;
use crate::modules::students::use_cases::advance_grade::handler::AdvanceGradeHandler;
use crate::modules::students::use_cases::register_student::handler::RegisterStudentHandler;
use crate::modules::students::use_cases::transfer_grade::handler::TransferGradeHandler;
use crate::modules::students::use_cases::update_student_info::handler::UpdateStudentInfoHandler;
use crate::modules::teacher_assignments::adapters::outbound::projections::AssignmentQueries;
use crate::modules::teacher_assignments::adapters::outbound::projections_in_memory::InMemoryAssignmentProjections;
use crate::modules::teacher_assignments::core::events::AssignmentEvent;
use crate::modules::teacher_assignments::core::evolve::evolve as evolve_assignment;
use crate::modules::teacher_assignments::use_cases::assign_teacher::handler::AssignTeacherHandler;
use crate::modules::teacher_assignments::use_cases::unassign_teacher::handler::UnassignTeacherHandler;
use crate::shared::application::projector::replay;
use crate::shared::auth::token_service::TokenService;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::event_store::postgres::PostgresEventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shared::infrastructure::intent_outbox::postgres::PostgresDomainOutbox;
use crate::shared::infrastructure::mailer::Mailer;
use crate::shell::config::AppConfig;

pub const USERS_TOPIC: &str = "identity.users.v1";
pub const CLASSES_TOPIC: &str = "classes.v1";
pub const STUDENTS_TOPIC: &str = "students.v1";
pub const ASSIGNMENTS_TOPIC: &str = "teacher-assignments.v1";
pub const ASSOCIATIONS_TOPIC: &str = "parent-links.v1";
pub const RESET_TOKENS_TOPIC: &str = "password-reset.v1";

/// One event store per aggregate plus the shared outbox.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn EventStore<UserEvent>>,
    pub classes: Arc<dyn EventStore<ClassEvent>>,
    pub students: Arc<dyn EventStore<StudentEvent>>,
    pub assignments: Arc<dyn EventStore<AssignmentEvent>>,
    pub associations: Arc<dyn EventStore<AssociationEvent>>,
    pub reset_tokens: Arc<dyn EventStore<ResetTokenEvent>>,
    pub outbox: Arc<dyn DomainOutbox>,
}

impl Stores {
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryEventStore::<UserEvent>::new()),
            classes: Arc::new(InMemoryEventStore::<ClassEvent>::new()),
            students: Arc::new(InMemoryEventStore::<StudentEvent>::new()),
            assignments: Arc::new(InMemoryEventStore::<AssignmentEvent>::new()),
            associations: Arc::new(InMemoryEventStore::<AssociationEvent>::new()),
            reset_tokens: Arc::new(InMemoryEventStore::<ResetTokenEvent>::new()),
            outbox: Arc::new(InMemoryDomainOutbox::new()),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PostgresEventStore::<UserEvent>::new(pool.clone(), "User")),
            classes: Arc::new(PostgresEventStore::<ClassEvent>::new(pool.clone(), "Class")),
            students: Arc::new(PostgresEventStore::<StudentEvent>::new(pool.clone(), "Student")),
            assignments: Arc::new(PostgresEventStore::<AssignmentEvent>::new(
                pool.clone(),
                "TeacherClassAssignment",
            )),
            associations: Arc::new(PostgresEventStore::<AssociationEvent>::new(
                pool.clone(),
                "ParentStudentAssociation",
            )),
            reset_tokens: Arc::new(PostgresEventStore::<ResetTokenEvent>::new(
                pool.clone(),
                "PasswordResetToken",
            )),
            outbox: Arc::new(PostgresDomainOutbox::new(pool)),
        }
    }
}

/// Read models held in process. Rebuilt from the event stores on startup.
#[derive(Clone, Default)]
pub struct ReadModels {
    pub users: Arc<InMemoryUserProjections>,
    pub classes: Arc<InMemoryClassProjections>,
    pub students: Arc<InMemoryStudentProjections>,
    pub assignments: Arc<InMemoryAssignmentProjections>,
    pub associations: Arc<InMemoryAssociationProjections>,
    pub reset_tokens: Arc<InMemoryResetTokenProjections>,
}

impl ReadModels {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn rebuild(&self, stores: &Stores) -> anyhow::Result<()> {
        let users = replay(&*stores.users, evolve_user, &*self.users).await?;
        let classes = replay(&*stores.classes, evolve_class, &*self.classes).await?;
        let students = replay(&*stores.students, evolve_student, &*self.students).await?;
        let assignments =
            replay(&*stores.assignments, evolve_assignment, &*self.assignments).await?;
        let associations =
            replay(&*stores.associations, evolve_association, &*self.associations).await?;
        let reset_tokens =
            replay(&*stores.reset_tokens, evolve_reset_token, &*self.reset_tokens).await?;
        tracing::info!(
            users,
            classes,
            students,
            assignments,
            associations,
            reset_tokens,
            "read models rebuilt"
        );
        Ok(())
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tokens: Arc<TokenService>,
    pub password_hasher: PasswordHasher,
    pub mailer: Arc<dyn Mailer>,

    pub users: Arc<dyn UserQueries>,
    pub register_user: Arc<RegisterUserHandler>,
    pub login: Arc<LoginHandler>,
    pub change_password: Arc<ChangePasswordHandler>,
    pub change_user_status: Arc<ChangeUserStatusHandler>,
    pub list_users: Arc<ListUsersHandler>,

    pub classes: Arc<dyn ClassQueries>,
    pub create_class: Arc<CreateClassHandler>,

    pub students: Arc<dyn StudentQueries>,
    pub register_student: Arc<RegisterStudentHandler>,
    pub transfer_grade: Arc<TransferGradeHandler>,
    pub advance_grade: Arc<AdvanceGradeHandler>,
    pub update_student_info: Arc<UpdateStudentInfoHandler>,

    pub assignments: Arc<dyn AssignmentQueries>,
    pub assign_teacher: Arc<AssignTeacherHandler>,
    pub unassign_teacher: Arc<UnassignTeacherHandler>,

    pub associations: Arc<dyn AssociationQueries>,
    pub associate_parent: Arc<AssociateParentHandler>,
    pub set_primary_contact: Arc<SetPrimaryContactHandler>,
    pub dissociate_parent: Arc<DissociateParentHandler>,

    pub access: Arc<AccessGuard>,

    pub request_password_reset: Arc<RequestPasswordResetHandler>,
    pub confirm_password_reset: Arc<ConfirmPasswordResetHandler>,
    pub purge_expired_tokens: Arc<PurgeExpiredTokensHandler>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        stores: &Stores,
        read_models: &ReadModels,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        let tokens = Arc::new(TokenService::new(
            &config.jwt_secret,
            config.jwt_issuer.clone(),
            Duration::hours(config.jwt_ttl_hours),
        ));
        let password_hasher = PasswordHasher::new(config.bcrypt_cost);
        let outbox = stores.outbox.clone();

        let change_password = Arc::new(ChangePasswordHandler::new(
            USERS_TOPIC,
            stores.users.clone(),
            outbox.clone(),
            read_models.users.clone(),
        ));
        let reset_settings = ResetSettings {
            token_ttl_ms: config.reset_token_ttl_ms(),
            mail_from: config.mail_from.clone(),
        };

        Self {
            tokens,
            password_hasher,
            mailer: mailer.clone(),

            users: read_models.users.clone(),
            register_user: Arc::new(RegisterUserHandler::new(
                USERS_TOPIC,
                stores.users.clone(),
                outbox.clone(),
                read_models.users.clone(),
            )),
            login: Arc::new(LoginHandler::new(
                USERS_TOPIC,
                stores.users.clone(),
                outbox.clone(),
                read_models.users.clone(),
                password_hasher,
            )),
            change_password: change_password.clone(),
            change_user_status: Arc::new(ChangeUserStatusHandler::new(
                USERS_TOPIC,
                stores.users.clone(),
                outbox.clone(),
                read_models.users.clone(),
            )),
            list_users: Arc::new(ListUsersHandler::new(read_models.users.clone())),

            classes: read_models.classes.clone(),
            create_class: Arc::new(CreateClassHandler::new(
                CLASSES_TOPIC,
                stores.classes.clone(),
                outbox.clone(),
                read_models.classes.clone(),
            )),

            students: read_models.students.clone(),
            register_student: Arc::new(RegisterStudentHandler::new(
                STUDENTS_TOPIC,
                stores.students.clone(),
                outbox.clone(),
                read_models.students.clone(),
                read_models.classes.clone(),
            )),
            transfer_grade: Arc::new(TransferGradeHandler::new(
                STUDENTS_TOPIC,
                stores.students.clone(),
                outbox.clone(),
                read_models.students.clone(),
            )),
            advance_grade: Arc::new(AdvanceGradeHandler::new(
                STUDENTS_TOPIC,
                stores.students.clone(),
                outbox.clone(),
                read_models.students.clone(),
            )),
            update_student_info: Arc::new(UpdateStudentInfoHandler::new(
                STUDENTS_TOPIC,
                stores.students.clone(),
                outbox.clone(),
                read_models.students.clone(),
            )),

            assignments: read_models.assignments.clone(),
            assign_teacher: Arc::new(AssignTeacherHandler::new(
                ASSIGNMENTS_TOPIC,
                stores.assignments.clone(),
                outbox.clone(),
                read_models.assignments.clone(),
                read_models.users.clone(),
                read_models.classes.clone(),
            )),
            unassign_teacher: Arc::new(UnassignTeacherHandler::new(
                ASSIGNMENTS_TOPIC,
                stores.assignments.clone(),
                outbox.clone(),
                read_models.assignments.clone(),
            )),

            associations: read_models.associations.clone(),
            associate_parent: Arc::new(AssociateParentHandler::new(
                ASSOCIATIONS_TOPIC,
                stores.associations.clone(),
                outbox.clone(),
                read_models.associations.clone(),
                read_models.users.clone(),
                read_models.students.clone(),
            )),
            set_primary_contact: Arc::new(SetPrimaryContactHandler::new(
                ASSOCIATIONS_TOPIC,
                stores.associations.clone(),
                outbox.clone(),
                read_models.associations.clone(),
            )),
            dissociate_parent: Arc::new(DissociateParentHandler::new(
                ASSOCIATIONS_TOPIC,
                stores.associations.clone(),
                outbox.clone(),
                read_models.associations.clone(),
            )),

            access: Arc::new(AccessGuard::new(
                read_models.assignments.clone(),
                read_models.students.clone(),
                read_models.associations.clone(),
            )),

            request_password_reset: Arc::new(RequestPasswordResetHandler::new(
                RESET_TOKENS_TOPIC,
                stores.reset_tokens.clone(),
                outbox.clone(),
                read_models.reset_tokens.clone(),
                read_models.users.clone(),
                mailer,
                reset_settings,
            )),
            confirm_password_reset: Arc::new(ConfirmPasswordResetHandler::new(
                RESET_TOKENS_TOPIC,
                stores.reset_tokens.clone(),
                outbox.clone(),
                read_models.reset_tokens.clone(),
                change_password,
                password_hasher,
            )),
            purge_expired_tokens: Arc::new(PurgeExpiredTokensHandler::new(
                RESET_TOKENS_TOPIC,
                stores.reset_tokens.clone(),
                outbox,
                read_models.reset_tokens.clone(),
            )),

            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
