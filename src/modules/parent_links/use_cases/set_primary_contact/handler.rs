use std::sync::Arc;

use crate::modules::parent_links::adapters::outbound::projections::AssociationReadModel;
use crate::modules::parent_links::core::events::AssociationEvent;
use crate::modules::parent_links::core::evolve::evolve;
use crate::modules::parent_links::core::state::{ParentStudentAssociation, stream_id};
use crate::modules::parent_links::use_cases::set_primary_contact::command::SetPrimaryContact;
use crate::modules::parent_links::use_cases::set_primary_contact::decide::{
    DecideError, decide_set_primary_contact,
};
use crate::shared::application::command_runner::execute;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

pub struct SetPrimaryContactHandler {
    topic: String,
    event_store: Arc<dyn EventStore<AssociationEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    read_model: Arc<dyn AssociationReadModel>,
}

impl SetPrimaryContactHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<AssociationEvent>>,
        outbox: Arc<dyn DomainOutbox>,
        read_model: Arc<dyn AssociationReadModel>,
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
        command: SetPrimaryContact,
    ) -> Result<ParentStudentAssociation, ApplicationError<DecideError>> {
        let stream_id = stream_id(&command.association_id);
        let committed = execute(
            &*self.event_store,
            &*self.outbox,
            &self.topic,
            &stream_id,
            evolve,
            |state| decide_set_primary_contact(state, command),
        )
        .await?;

        self.read_model
            .project(&committed.state)
            .await
            .map_err(ApplicationError::projection)?;

        committed
            .state
            .active()
            .cloned()
            .ok_or_else(|| ApplicationError::Domain(DecideError::NotFound))
    }
}
