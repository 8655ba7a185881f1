use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::modules::identity::adapters::outbound::projections::UserQueries;
use crate::modules::identity::core::projections::{Mutation, UserRow, apply};
use crate::modules::identity::core::state::UserState;
use crate::shared::application::projector::StateProjection;
use crate::shared::core::primitives::UserId;

#[derive(Default)]
pub struct InMemoryUserProjections {
    rows: RwLock<HashMap<UserId, UserRow>>,
    is_offline: AtomicBool,
}

impl InMemoryUserProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("User projections offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl StateProjection<UserState> for InMemoryUserProjections {
    async fn project(&self, state: &UserState) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        for mutation in apply(state) {
            match mutation {
                Mutation::Upsert(row) => {
                    guard.insert(row.user_id, row);
                }
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserQueries for InMemoryUserProjections {
    async fn find_by_id(&self, user_id: UserId) -> anyhow::Result<Option<UserRow>> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(&user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>> {
        self.ensure_online()?;
        let needle = email.to_lowercase();
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|row| row.email.to_lowercase() == needle)
            .cloned())
    }

    async fn list(&self) -> anyhow::Result<Vec<UserRow>> {
        self.ensure_online()?;
        let mut rows: Vec<UserRow> = self.rows.read().await.values().cloned().collect();
        rows.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });
        Ok(rows)
    }

    async fn count(&self) -> anyhow::Result<u64> {
        self.ensure_online()?;
        Ok(self.rows.read().await.len() as u64)
    }
}
