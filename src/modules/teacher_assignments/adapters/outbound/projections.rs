use async_trait::async_trait;

use crate::modules::teacher_assignments::core::projections::AssignmentRow;
use crate::modules::teacher_assignments::core::state::AssignmentState;
use crate::shared::application::projector::StateProjection;
use crate::shared::core::primitives::{AssignmentId, ClassId, UserId};

#[async_trait]
pub trait AssignmentQueries: Send + Sync {
    async fn find_by_id(&self, assignment_id: AssignmentId)
    -> anyhow::Result<Option<AssignmentRow>>;

    async fn find_by_teacher_and_class(
        &self,
        teacher_id: UserId,
        class_id: ClassId,
    ) -> anyhow::Result<Option<AssignmentRow>>;

    /// Oldest assignment first.
    async fn list_by_teacher(&self, teacher_id: UserId) -> anyhow::Result<Vec<AssignmentRow>>;

    async fn list_by_class(&self, class_id: ClassId) -> anyhow::Result<Vec<AssignmentRow>>;
}

pub trait AssignmentReadModel: StateProjection<AssignmentState> + AssignmentQueries {}

impl<T> AssignmentReadModel for T where T: StateProjection<AssignmentState> + AssignmentQueries {}
