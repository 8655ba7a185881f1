use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::modules::password_reset::adapters::outbound::projections::ResetTokenQueries;
use crate::modules::password_reset::core::projections::{Mutation, ResetTokenRow, apply};
use crate::modules::password_reset::core::state::ResetTokenState;
use crate::shared::application::projector::StateProjection;
use crate::shared::core::primitives::{ResetTokenId, UserId};

#[derive(Default)]
pub struct InMemoryResetTokenProjections {
    rows: RwLock<HashMap<ResetTokenId, ResetTokenRow>>,
    is_offline: AtomicBool,
}

impl InMemoryResetTokenProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("Reset token projections offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl StateProjection<ResetTokenState> for InMemoryResetTokenProjections {
    async fn project(&self, state: &ResetTokenState) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        for mutation in apply(state) {
            match mutation {
                Mutation::Upsert(row) => {
                    guard.insert(row.token_id, row);
                }
                Mutation::Delete(token_id) => {
                    guard.remove(&token_id);
                }
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ResetTokenQueries for InMemoryResetTokenProjections {
    async fn find_by_token(&self, token: &str) -> anyhow::Result<Option<ResetTokenRow>> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|row| row.token == token)
            .cloned())
    }

    async fn list_by_user(&self, user_id: UserId) -> anyhow::Result<Vec<ResetTokenRow>> {
        self.ensure_online()?;
        let mut rows: Vec<ResetTokenRow> = self
            .rows
            .read()
            .await
            .values()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn list_expired(&self, now: i64) -> anyhow::Result<Vec<ResetTokenRow>> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|row| row.expires_at < now)
            .cloned()
            .collect())
    }
}
