use std::sync::Arc;

use crate::modules::teacher_assignments::adapters::outbound::projections::AssignmentReadModel;
use crate::modules::teacher_assignments::core::events::AssignmentEvent;
use crate::modules::teacher_assignments::core::evolve::evolve;
use crate::modules::teacher_assignments::core::state::stream_id;
use crate::modules::teacher_assignments::use_cases::unassign_teacher::command::UnassignTeacher;
use crate::modules::teacher_assignments::use_cases::unassign_teacher::decide::{
    DecideError, decide_unassign_teacher,
};
use crate::shared::application::command_runner::execute;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

pub struct UnassignTeacherHandler {
    topic: String,
    event_store: Arc<dyn EventStore<AssignmentEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    read_model: Arc<dyn AssignmentReadModel>,
}

impl UnassignTeacherHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<AssignmentEvent>>,
        outbox: Arc<dyn DomainOutbox>,
        read_model: Arc<dyn AssignmentReadModel>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            read_model,
        }
    }

    pub async fn handle(&self, command: UnassignTeacher) -> Result<(), ApplicationError<DecideError>> {
        let stream_id = stream_id(&command.assignment_id);
        let committed = execute(
            &*self.event_store,
            &*self.outbox,
            &self.topic,
            &stream_id,
            evolve,
            |state| decide_unassign_teacher(state, command),
        )
        .await?;

        self.read_model
            .project(&committed.state)
            .await
            .map_err(ApplicationError::projection)
    }
}
