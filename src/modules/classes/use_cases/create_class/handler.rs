use std::sync::Arc;
use tokio::sync::Mutex;

use crate::modules::classes::adapters::outbound::projections::ClassReadModel;
use crate::modules::classes::core::events::ClassEvent;
use crate::modules::classes::core::evolve::evolve;
use crate::modules::classes::core::state::{SchoolClass, stream_id};
use crate::modules::classes::use_cases::create_class::command::CreateClass;
use crate::modules::classes::use_cases::create_class::decide::{DecideError, decide_create_class};
use crate::shared::application::command_runner::execute;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

pub struct CreateClassHandler {
    topic: String,
    event_store: Arc<dyn EventStore<ClassEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    read_model: Arc<dyn ClassReadModel>,
    creation: Mutex<()>,
}

impl CreateClassHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<ClassEvent>>,
        outbox: Arc<dyn DomainOutbox>,
        read_model: Arc<dyn ClassReadModel>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            read_model,
            creation: Mutex::new(()),
        }
    }

    pub async fn handle(
        &self,
        command: CreateClass,
    ) -> Result<SchoolClass, ApplicationError<DecideError>> {
        let _creation = self.creation.lock().await;

        let name_taken = self
            .read_model
            .exists(
                command.name.as_str(),
                command.grade_level,
                command.academic_year.as_str(),
            )
            .await
            .map_err(ApplicationError::projection)?;

        let stream_id = stream_id(&command.class_id);
        let committed = execute(
            &*self.event_store,
            &*self.outbox,
            &self.topic,
            &stream_id,
            evolve,
            |state| decide_create_class(state, name_taken, command),
        )
        .await?;

        self.read_model
            .project(&committed.state)
            .await
            .map_err(ApplicationError::projection)?;

        committed
            .state
            .class()
            .cloned()
            .ok_or_else(|| ApplicationError::Unexpected("class missing after creation".into()))
    }
}
