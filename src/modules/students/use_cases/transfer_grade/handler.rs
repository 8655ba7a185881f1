use std::sync::Arc;

use crate::modules::students::adapters::outbound::projections::StudentReadModel;
use crate::modules::students::core::events::StudentEvent;
use crate::modules::students::core::evolve::evolve;
use crate::modules::students::core::state::{Student, stream_id};
use crate::modules::students::use_cases::transfer_grade::command::TransferGrade;
use crate::modules::students::use_cases::transfer_grade::decide::{
    DecideError, decide_transfer_grade,
};
use crate::shared::application::command_runner::execute;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

pub struct TransferGradeHandler {
    topic: String,
    event_store: Arc<dyn EventStore<StudentEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    read_model: Arc<dyn StudentReadModel>,
}

impl TransferGradeHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<StudentEvent>>,
        outbox: Arc<dyn DomainOutbox>,
        read_model: Arc<dyn StudentReadModel>,
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
        command: TransferGrade,
    ) -> Result<Student, ApplicationError<DecideError>> {
        let stream_id = stream_id(&command.student_id);
        let committed = execute(
            &*self.event_store,
            &*self.outbox,
            &self.topic,
            &stream_id,
            evolve,
            |state| decide_transfer_grade(state, command),
        )
        .await?;

        self.read_model
            .project(&committed.state)
            .await
            .map_err(ApplicationError::projection)?;

        committed
            .state
            .student()
            .cloned()
            .ok_or(ApplicationError::Domain(DecideError::NotFound))
    }
}
