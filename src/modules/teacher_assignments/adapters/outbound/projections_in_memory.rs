use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::modules::teacher_assignments::adapters::outbound::projections::AssignmentQueries;
use crate::modules::teacher_assignments::core::projections::{AssignmentRow, Mutation, apply};
use crate::modules::teacher_assignments::core::state::AssignmentState;
use crate::shared::application::projector::StateProjection;
use crate::shared::core::primitives::{AssignmentId, ClassId, UserId};

#[derive(Default)]
pub struct InMemoryAssignmentProjections {
    rows: RwLock<HashMap<AssignmentId, AssignmentRow>>,
    is_offline: AtomicBool,
}

impl InMemoryAssignmentProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("Assignment projections offline"));
        }
        Ok(())
    }

    async fn select(&self, keep: impl Fn(&AssignmentRow) -> bool) -> Vec<AssignmentRow> {
        let mut rows: Vec<AssignmentRow> = self
            .rows
            .read()
            .await
            .values()
            .filter(|row| keep(row))
            .cloned()
            .collect();
        rows.sort_by_key(|row| (row.created_at, row.assignment_id));
        rows
    }
}

#[async_trait::async_trait]
impl StateProjection<AssignmentState> for InMemoryAssignmentProjections {
    async fn project(&self, state: &AssignmentState) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        for mutation in apply(state) {
            match mutation {
                Mutation::Upsert(row) => {
                    guard.insert(row.assignment_id, row);
                }
                Mutation::Delete(assignment_id) => {
                    guard.remove(&assignment_id);
                }
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AssignmentQueries for InMemoryAssignmentProjections {
    async fn find_by_id(
        &self,
        assignment_id: AssignmentId,
    ) -> anyhow::Result<Option<AssignmentRow>> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(&assignment_id).cloned())
    }

    async fn find_by_teacher_and_class(
        &self,
        teacher_id: UserId,
        class_id: ClassId,
    ) -> anyhow::Result<Option<AssignmentRow>> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|row| row.teacher_id == teacher_id && row.class_id == class_id)
            .cloned())
    }

    async fn list_by_teacher(&self, teacher_id: UserId) -> anyhow::Result<Vec<AssignmentRow>> {
        self.ensure_online()?;
        Ok(self.select(|row| row.teacher_id == teacher_id).await)
    }

    async fn list_by_class(&self, class_id: ClassId) -> anyhow::Result<Vec<AssignmentRow>> {
        self.ensure_online()?;
        Ok(self.select(|row| row.class_id == class_id).await)
    }
}
