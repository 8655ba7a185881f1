use std::sync::Arc;

use crate::modules::classes::adapters::outbound::projections::ClassQueries;
use crate::modules::students::adapters::outbound::projections::StudentReadModel;
use crate::modules::students::core::events::StudentEvent;
use crate::modules::students::core::evolve::evolve;
use crate::modules::students::core::state::{Student, stream_id};
use crate::modules::students::use_cases::register_student::command::RegisterStudent;
use crate::modules::students::use_cases::register_student::decide::{
    DecideError, decide_register_student,
};
use crate::shared::application::command_runner::execute;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

pub struct RegisterStudentHandler {
    topic: String,
    event_store: Arc<dyn EventStore<StudentEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    read_model: Arc<dyn StudentReadModel>,
    classes: Arc<dyn ClassQueries>,
}

impl RegisterStudentHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<StudentEvent>>,
        outbox: Arc<dyn DomainOutbox>,
        read_model: Arc<dyn StudentReadModel>,
        classes: Arc<dyn ClassQueries>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            read_model,
            classes,
        }
    }

    pub async fn handle(
        &self,
        command: RegisterStudent,
    ) -> Result<Student, ApplicationError<DecideError>> {
        let class_exists = self
            .classes
            .find_by_id(command.class_id)
            .await
            .map_err(ApplicationError::projection)?
            .is_some();

        let stream_id = stream_id(&command.student_id);
        let committed = execute(
            &*self.event_store,
            &*self.outbox,
            &self.topic,
            &stream_id,
            evolve,
            |state| decide_register_student(state, class_exists, command),
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
            .ok_or_else(|| ApplicationError::Unexpected("student missing after registration".into()))
    }
}
