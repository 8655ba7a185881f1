use std::sync::Arc;

use crate::modules::identity::adapters::outbound::projections::UserReadModel;
use crate::modules::identity::core::events::UserEvent;
use crate::modules::identity::core::evolve::evolve;
use crate::modules::identity::core::state::stream_id;
use crate::modules::identity::use_cases::change_password::command::ChangePassword;
use crate::modules::identity::use_cases::change_password::decide::{
    DecideError, decide_change_password,
};
use crate::shared::application::command_runner::execute;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

/// Internal use case. Reached through password reset only.
pub struct ChangePasswordHandler {
    topic: String,
    event_store: Arc<dyn EventStore<UserEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    read_model: Arc<dyn UserReadModel>,
}

impl ChangePasswordHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<UserEvent>>,
        outbox: Arc<dyn DomainOutbox>,
        read_model: Arc<dyn UserReadModel>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            read_model,
        }
    }

    pub async fn handle(&self, command: ChangePassword) -> Result<(), ApplicationError<DecideError>> {
        let stream_id = stream_id(&command.user_id);
        let committed = execute(
            &*self.event_store,
            &*self.outbox,
            &self.topic,
            &stream_id,
            evolve,
            |state| decide_change_password(state, command),
        )
        .await?;

        self.read_model
            .project(&committed.state)
            .await
            .map_err(ApplicationError::projection)
    }
}

#[cfg(test)]
mod change_password_handler_tests {
    use super::*;
    use crate::modules::identity::adapters::outbound::projections_in_memory::InMemoryUserProjections;
    use crate::modules::identity::core::password::PasswordHasher;
    use crate::modules::identity::use_cases::login::command::Login;
    use crate::modules::identity::use_cases::login::handler::LoginHandler;
    use crate::modules::identity::use_cases::register_user::handler::RegisterUserHandler;
    use crate::shared::core::primitives::UserId;
    use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
    use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
    use crate::tests::fixtures::commands::register_user::RegisterUserBuilder;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_let_the_user_log_in_with_the_new_password() {
        let event_store = Arc::new(InMemoryEventStore::<UserEvent>::new());
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        let projections = Arc::new(InMemoryUserProjections::new());
        let hasher = PasswordHasher::new(4);
        let register =
            RegisterUserHandler::new("users", event_store.clone(), outbox.clone(), projections.clone());
        let handler =
            ChangePasswordHandler::new("users", event_store.clone(), outbox.clone(), projections.clone());
        let login = LoginHandler::new("users", event_store, outbox, projections, hasher);
        let user = register
            .handle(RegisterUserBuilder::new().build())
            .await
            .unwrap();

        handler
            .handle(ChangePassword {
                user_id: user.user_id,
                password_hash: hasher.hash("brand-new-secret").unwrap(),
                changed_at: 1_700_000_500_000,
            })
            .await
            .unwrap();

        let logged_in = login
            .handle(Login {
                email: user.email.to_string(),
                password: "brand-new-secret".into(),
                logged_in_at: 1_700_000_600_000,
            })
            .await;
        assert!(logged_in.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_an_unknown_user() {
        let handler = ChangePasswordHandler::new(
            "users",
            Arc::new(InMemoryEventStore::<UserEvent>::new()),
            Arc::new(InMemoryDomainOutbox::new()),
            Arc::new(InMemoryUserProjections::new()),
        );
        let result = handler
            .handle(ChangePassword {
                user_id: UserId::new(),
                password_hash: crate::modules::identity::core::password::PasswordHash::from_hashed("x"),
                changed_at: 1,
            })
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DecideError::NotFound))
        ));
    }
}
