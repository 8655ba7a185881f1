use std::sync::Arc;

use crate::modules::identity::adapters::outbound::projections::UserReadModel;
use crate::modules::identity::core::events::UserEvent;
use crate::modules::identity::core::evolve::evolve;
use crate::modules::identity::core::password::PasswordHasher;
use crate::modules::identity::core::state::{User, stream_id};
use crate::modules::identity::use_cases::login::command::Login;
use crate::modules::identity::use_cases::login::decide::{DecideError, decide_login};
use crate::shared::application::command_runner::{execute, rehydrate};
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

pub struct LoginHandler {
    topic: String,
    event_store: Arc<dyn EventStore<UserEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    read_model: Arc<dyn UserReadModel>,
    hasher: PasswordHasher,
}

impl LoginHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<UserEvent>>,
        outbox: Arc<dyn DomainOutbox>,
        read_model: Arc<dyn UserReadModel>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            read_model,
            hasher,
        }
    }

    pub async fn handle(&self, command: Login) -> Result<User, ApplicationError<DecideError>> {
        let row = self
            .read_model
            .find_by_email(&command.email)
            .await
            .map_err(ApplicationError::projection)?
            .ok_or(ApplicationError::Domain(DecideError::InvalidCredentials))?;

        let stream_id = stream_id(&row.user_id);
        let (current, _) = rehydrate(&*self.event_store, &stream_id, evolve).await?;
        let password_matches = match current.user() {
            Some(user) if user.is_active => {
                self.hasher
                    .verify_async(&command.password, &user.password_hash)
                    .await
            }
            _ => false,
        };

        let committed = execute(
            &*self.event_store,
            &*self.outbox,
            &self.topic,
            &stream_id,
            evolve,
            |state| decide_login(state, password_matches, command.logged_in_at),
        )
        .await?;

        self.read_model
            .project(&committed.state)
            .await
            .map_err(ApplicationError::projection)?;

        committed
            .state
            .user()
            .cloned()
            .ok_or_else(|| ApplicationError::Unexpected("user missing after login".into()))
    }
}
