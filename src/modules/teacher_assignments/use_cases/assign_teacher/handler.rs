use std::sync::Arc;
use tokio::sync::Mutex;

use crate::modules::classes::adapters::outbound::projections::ClassQueries;
use crate::modules::identity::adapters::outbound::projections::UserQueries;
use crate::modules::teacher_assignments::adapters::outbound::projections::AssignmentReadModel;
use crate::modules::teacher_assignments::core::events::AssignmentEvent;
use crate::modules::teacher_assignments::core::evolve::evolve;
use crate::modules::teacher_assignments::core::state::{TeacherAssignment, stream_id};
use crate::modules::teacher_assignments::use_cases::assign_teacher::command::AssignTeacher;
use crate::modules::teacher_assignments::use_cases::assign_teacher::decide::{
    DecideError, Parties, decide_assign_teacher,
};
use crate::shared::application::command_runner::execute;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

pub struct AssignTeacherHandler {
    topic: String,
    event_store: Arc<dyn EventStore<AssignmentEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    read_model: Arc<dyn AssignmentReadModel>,
    users: Arc<dyn UserQueries>,
    classes: Arc<dyn ClassQueries>,
    creation: Mutex<()>,
}

impl AssignTeacherHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<AssignmentEvent>>,
        outbox: Arc<dyn DomainOutbox>,
        read_model: Arc<dyn AssignmentReadModel>,
        users: Arc<dyn UserQueries>,
        classes: Arc<dyn ClassQueries>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            read_model,
            users,
            classes,
            creation: Mutex::new(()),
        }
    }

    async fn parties(&self, command: &AssignTeacher) -> anyhow::Result<Parties> {
        let teacher = self.users.find_by_id(command.teacher_id).await?;
        let class = self.classes.find_by_id(command.class_id).await?;
        let existing = self
            .read_model
            .find_by_teacher_and_class(command.teacher_id, command.class_id)
            .await?;
        Ok(Parties {
            teacher_role: teacher.map(|row| row.role),
            class_exists: class.is_some(),
            already_assigned: existing.is_some(),
        })
    }

    pub async fn handle(
        &self,
        command: AssignTeacher,
    ) -> Result<TeacherAssignment, ApplicationError<DecideError>> {
        let _creation = self.creation.lock().await;
        let parties = self
            .parties(&command)
            .await
            .map_err(ApplicationError::projection)?;

        let stream_id = stream_id(&command.assignment_id);
        let committed = execute(
            &*self.event_store,
            &*self.outbox,
            &self.topic,
            &stream_id,
            evolve,
            |state| decide_assign_teacher(state, parties, command),
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
            .ok_or_else(|| ApplicationError::Unexpected("assignment missing after creation".into()))
    }
}
