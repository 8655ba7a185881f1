use std::sync::Arc;

use crate::modules::identity::adapters::outbound::projections::UserQueries;
use crate::modules::identity::core::projections::UserRow;

pub struct ListUsersHandler {
    queries: Arc<dyn UserQueries>,
}

impl ListUsersHandler {
    pub fn new(queries: Arc<dyn UserQueries>) -> Self {
        Self { queries }
    }

    pub async fn list(&self) -> anyhow::Result<Vec<UserRow>> {
        self.queries.list().await
    }

    pub async fn count(&self) -> anyhow::Result<u64> {
        self.queries.count().await
    }
}
