use async_trait::async_trait;

use crate::modules::password_reset::core::projections::ResetTokenRow;
use crate::modules::password_reset::core::state::ResetTokenState;
use crate::shared::application::projector::StateProjection;
use crate::shared::core::primitives::UserId;

#[async_trait]
pub trait ResetTokenQueries: Send + Sync {
    async fn find_by_token(&self, token: &str) -> anyhow::Result<Option<ResetTokenRow>>;

    /// Newest first.
    async fn list_by_user(&self, user_id: UserId) -> anyhow::Result<Vec<ResetTokenRow>>;

    /// Tokens whose expiry lies before `now`.
    async fn list_expired(&self, now: i64) -> anyhow::Result<Vec<ResetTokenRow>>;
}

pub trait ResetTokenReadModel: StateProjection<ResetTokenState> + ResetTokenQueries {}

impl<T> ResetTokenReadModel for T where T: StateProjection<ResetTokenState> + ResetTokenQueries {}
