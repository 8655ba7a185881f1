use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use sqlx::PgPool;

pub struct PostgresDomainOutbox {
    pool: PgPool,
}

impl PostgresDomainOutbox {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl DomainOutbox for PostgresDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        let result = sqlx::query(
            "INSERT INTO domain_outbox \
             (topic, event_type, event_version, stream_id, stream_version, occurred_at, payload) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&row.topic)
        .bind(&row.event_type)
        .bind(row.event_version)
        .bind(&row.stream_id)
        .bind(row.stream_version)
        .bind(row.occurred_at)
        .bind(&row.payload)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err)
                if err
                    .as_database_error()
                    .map(|db| db.is_unique_violation())
                    .unwrap_or(false) =>
            {
                Err(OutboxError::Duplicate {
                    stream_id: row.stream_id,
                    stream_version: row.stream_version,
                })
            }
            Err(err) => Err(OutboxError::Backend(err.to_string())),
        }
    }
}
