use async_trait::async_trait;

use crate::modules::parent_links::core::projections::AssociationRow;
use crate::modules::parent_links::core::state::AssociationState;
use crate::shared::application::projector::StateProjection;
use crate::shared::core::primitives::{AssociationId, StudentId, UserId};

#[async_trait]
pub trait AssociationQueries: Send + Sync {
    async fn find_by_id(
        &self,
        association_id: AssociationId,
    ) -> anyhow::Result<Option<AssociationRow>>;

    async fn find_by_parent_and_student(
        &self,
        parent_id: UserId,
        student_id: StudentId,
    ) -> anyhow::Result<Option<AssociationRow>>;

    async fn list_by_parent(&self, parent_id: UserId) -> anyhow::Result<Vec<AssociationRow>>;

    /// Primary contacts first.
    async fn list_by_student(&self, student_id: StudentId) -> anyhow::Result<Vec<AssociationRow>>;
}

pub trait AssociationReadModel: StateProjection<AssociationState> + AssociationQueries {}

impl<T> AssociationReadModel for T where T: StateProjection<AssociationState> + AssociationQueries {}
