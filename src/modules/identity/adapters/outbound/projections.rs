use async_trait::async_trait;

use crate::modules::identity::core::projections::UserRow;
use crate::modules::identity::core::state::UserState;
use crate::shared::application::projector::StateProjection;
use crate::shared::core::primitives::UserId;

#[async_trait]
pub trait UserQueries: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> anyhow::Result<Option<UserRow>>;

    /// Case-insensitive.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>>;

    /// Oldest first.
    async fn list(&self) -> anyhow::Result<Vec<UserRow>>;

    async fn count(&self) -> anyhow::Result<u64>;
}

pub trait UserReadModel: StateProjection<UserState> + UserQueries {}

impl<T> UserReadModel for T where T: StateProjection<UserState> + UserQueries {}
