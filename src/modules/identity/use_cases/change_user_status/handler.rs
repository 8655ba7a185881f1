use std::sync::Arc;

use crate::modules::identity::adapters::outbound::projections::UserReadModel;
use crate::modules::identity::core::events::UserEvent;
use crate::modules::identity::core::evolve::evolve;
use crate::modules::identity::core::state::{User, stream_id};
use crate::modules::identity::use_cases::change_user_status::command::ChangeUserStatus;
use crate::modules::identity::use_cases::change_user_status::decide::{
    DecideError, decide_change_user_status,
};
use crate::shared::application::command_runner::execute;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

pub struct ChangeUserStatusHandler {
    topic: String,
    event_store: Arc<dyn EventStore<UserEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    read_model: Arc<dyn UserReadModel>,
}

impl ChangeUserStatusHandler {
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

    pub async fn handle(
        &self,
        command: ChangeUserStatus,
    ) -> Result<User, ApplicationError<DecideError>> {
        let stream_id = stream_id(&command.user_id);
        let committed = execute(
            &*self.event_store,
            &*self.outbox,
            &self.topic,
            &stream_id,
            evolve,
            |state| decide_change_user_status(state, command),
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
            .ok_or(ApplicationError::Domain(DecideError::NotFound))
    }
}
