use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::modules::parent_links::adapters::outbound::projections::AssociationQueries;
use crate::modules::parent_links::core::projections::{AssociationRow, Mutation, apply};
use crate::modules::parent_links::core::state::AssociationState;
use crate::shared::application::projector::StateProjection;
use crate::shared::core::primitives::{AssociationId, StudentId, UserId};

#[derive(Default)]
pub struct InMemoryAssociationProjections {
    rows: RwLock<HashMap<AssociationId, AssociationRow>>,
    is_offline: AtomicBool,
}

impl InMemoryAssociationProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("Association projections offline"));
        }
        Ok(())
    }

    async fn select(&self, keep: impl Fn(&AssociationRow) -> bool) -> Vec<AssociationRow> {
        let mut rows: Vec<AssociationRow> = self
            .rows
            .read()
            .await
            .values()
            .filter(|row| keep(row))
            .cloned()
            .collect();
        rows.sort_by_key(|row| (!row.is_primary_contact, row.created_at, row.association_id));
        rows
    }
}

#[async_trait::async_trait]
impl StateProjection<AssociationState> for InMemoryAssociationProjections {
    async fn project(&self, state: &AssociationState) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        for mutation in apply(state) {
            match mutation {
                Mutation::Upsert(row) => {
                    guard.insert(row.association_id, row);
                }
                Mutation::Delete(association_id) => {
                    guard.remove(&association_id);
                }
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AssociationQueries for InMemoryAssociationProjections {
    async fn find_by_id(
        &self,
        association_id: AssociationId,
    ) -> anyhow::Result<Option<AssociationRow>> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(&association_id).cloned())
    }

    async fn find_by_parent_and_student(
        &self,
        parent_id: UserId,
        student_id: StudentId,
    ) -> anyhow::Result<Option<AssociationRow>> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|row| row.parent_id == parent_id && row.student_id == student_id)
            .cloned())
    }

    async fn list_by_parent(&self, parent_id: UserId) -> anyhow::Result<Vec<AssociationRow>> {
        self.ensure_online()?;
        Ok(self.select(|row| row.parent_id == parent_id).await)
    }

    async fn list_by_student(&self, student_id: StudentId) -> anyhow::Result<Vec<AssociationRow>> {
        self.ensure_online()?;
        Ok(self.select(|row| row.student_id == student_id).await)
    }
}
