use std::sync::Arc;
use tokio::sync::Mutex;

use crate::modules::identity::adapters::outbound::projections::UserReadModel;
use crate::modules::identity::core::events::UserEvent;
use crate::modules::identity::core::evolve::evolve;
use crate::modules::identity::core::state::{User, stream_id};
use crate::modules::identity::use_cases::register_user::command::RegisterUser;
use crate::modules::identity::use_cases::register_user::decide::{
    DecideError, decide_register_user,
};
use crate::shared::application::command_runner::execute;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

pub struct RegisterUserHandler {
    topic: String,
    event_store: Arc<dyn EventStore<UserEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    read_model: Arc<dyn UserReadModel>,
    // Serializes the email uniqueness check with the append.
    registration: Mutex<()>,
}

impl RegisterUserHandler {
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
            registration: Mutex::new(()),
        }
    }

    pub async fn handle(&self, command: RegisterUser) -> Result<User, ApplicationError<DecideError>> {
        let _registration = self.registration.lock().await;

        let email_taken = self
            .read_model
            .find_by_email(command.email.as_str())
            .await
            .map_err(ApplicationError::projection)?
            .is_some();

        let stream_id = stream_id(&command.user_id);
        let committed = execute(
            &*self.event_store,
            &*self.outbox,
            &self.topic,
            &stream_id,
            evolve,
            |state| decide_register_user(state, email_taken, command),
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
            .ok_or_else(|| ApplicationError::Unexpected("user missing after registration".into()))
    }
}
