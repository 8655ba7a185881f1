use std::sync::Arc;
use tokio::sync::Mutex;

use crate::modules::identity::adapters::outbound::projections::UserQueries;
use crate::modules::parent_links::adapters::outbound::projections::AssociationReadModel;
use crate::modules::parent_links::core::events::AssociationEvent;
use crate::modules::parent_links::core::evolve::evolve;
use crate::modules::parent_links::core::state::{ParentStudentAssociation, stream_id};
use crate::modules::parent_links::use_cases::associate_parent::command::AssociateParent;
use crate::modules::parent_links::use_cases::associate_parent::decide::{
    DecideError, Parties, decide_associate_parent,
};
use crate::modules::students::adapters::outbound::projections::StudentQueries;
use crate::shared::application::command_runner::execute;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

pub struct AssociateParentHandler {
    topic: String,
    event_store: Arc<dyn EventStore<AssociationEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    read_model: Arc<dyn AssociationReadModel>,
    users: Arc<dyn UserQueries>,
    students: Arc<dyn StudentQueries>,
    creation: Mutex<()>,
}

impl AssociateParentHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<AssociationEvent>>,
        outbox: Arc<dyn DomainOutbox>,
        read_model: Arc<dyn AssociationReadModel>,
        users: Arc<dyn UserQueries>,
        students: Arc<dyn StudentQueries>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            read_model,
            users,
            students,
            creation: Mutex::new(()),
        }
    }

    async fn parties(&self, command: &AssociateParent) -> anyhow::Result<Parties> {
        let parent = self.users.find_by_id(command.parent_id).await?;
        let student = self.students.find_by_id(command.student_id).await?;
        let existing = self
            .read_model
            .find_by_parent_and_student(command.parent_id, command.student_id)
            .await?;
        Ok(Parties {
            parent_role: parent.map(|row| row.role),
            student_exists: student.is_some(),
            already_linked: existing.is_some(),
        })
    }

    pub async fn handle(
        &self,
        command: AssociateParent,
    ) -> Result<ParentStudentAssociation, ApplicationError<DecideError>> {
        let _creation = self.creation.lock().await;
        let parties = self
            .parties(&command)
            .await
            .map_err(ApplicationError::projection)?;

        let stream_id = stream_id(&command.association_id);
        let committed = execute(
            &*self.event_store,
            &*self.outbox,
            &self.topic,
            &stream_id,
            evolve,
            |state| decide_associate_parent(state, parties, command),
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
            .ok_or_else(|| ApplicationError::Unexpected("association missing after creation".into()))
    }
}
