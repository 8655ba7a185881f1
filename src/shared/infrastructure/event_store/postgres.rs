use crate::shared::core::domain_event::DomainEvent;
use crate::shared::infrastructure::event_store::{
    EventStore, EventStoreError, LoadedStream, StoredStream,
};
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::marker::PhantomData;

/// Event store over the shared `events` table. `category` partitions the
/// table per aggregate so `load_all` only replays this store's streams.
pub struct PostgresEventStore<Event> {
    pool: PgPool,
    category: String,
    _event: PhantomData<fn() -> Event>,
}

impl<Event> PostgresEventStore<Event> {
    pub fn new(pool: PgPool, category: impl Into<String>) -> Self {
        Self {
            pool,
            category: category.into(),
            _event: PhantomData,
        }
    }
}

fn decode<Event: DomainEvent>(payload: serde_json::Value) -> Result<Event, EventStoreError> {
    serde_json::from_value(payload).map_err(|e| EventStoreError::Backend(e.to_string()))
}

#[async_trait::async_trait]
impl<Event> EventStore<Event> for PostgresEventStore<Event>
where
    Event: DomainEvent,
{
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError> {
        let rows = sqlx::query(
            "SELECT payload FROM events WHERE stream_id = $1 ORDER BY stream_version ASC",
        )
        .bind(stream_id)
        .fetch_all(&self.pool)
        .await?;

        let events = rows
            .into_iter()
            .map(|row| decode(row.try_get("payload")?))
            .collect::<Result<Vec<Event>, EventStoreError>>()?;
        let version = events.len() as i64;
        Ok(LoadedStream { events, version })
    }

    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError> {
        let mut tx = self.pool.begin().await?;

        let actual: i64 = sqlx::query_scalar(
            "SELECT COALESCE(MAX(stream_version), 0) FROM events WHERE stream_id = $1",
        )
        .bind(stream_id)
        .fetch_one(&mut *tx)
        .await?;
        if actual != expected_version {
            return Err(EventStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }

        for (i, event) in new_events.iter().enumerate() {
            let payload = serde_json::to_value(event)
                .map_err(|e| EventStoreError::Backend(e.to_string()))?;
            let result = sqlx::query(
                "INSERT INTO events \
                 (category, stream_id, stream_version, event_type, event_version, occurred_at, payload) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(&self.category)
            .bind(stream_id)
            .bind(expected_version + i as i64 + 1)
            .bind(event.event_type())
            .bind(event.event_version())
            .bind(event.occurred_at())
            .bind(payload)
            .execute(&mut *tx)
            .await;

            if let Err(err) = result {
                let is_unique_violation = err
                    .as_database_error()
                    .map(|db| db.is_unique_violation())
                    .unwrap_or(false);
                if is_unique_violation {
                    return Err(EventStoreError::VersionMismatch {
                        expected: expected_version,
                        actual: expected_version + 1,
                    });
                }
                return Err(err.into());
            }
        }

        tx.commit().await?;
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<StoredStream<Event>>, EventStoreError> {
        let rows = sqlx::query(
            "SELECT stream_id, payload FROM events WHERE category = $1 ORDER BY global_position ASC",
        )
        .bind(&self.category)
        .fetch_all(&self.pool)
        .await?;

        let mut streams: Vec<StoredStream<Event>> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for row in rows {
            let stream_id: String = row.try_get("stream_id")?;
            let event = decode(row.try_get("payload")?)?;
            let index = *positions.entry(stream_id.clone()).or_insert_with(|| {
                streams.push(StoredStream {
                    stream_id,
                    events: Vec::new(),
                    version: 0,
                });
                streams.len() - 1
            });
            let stream = &mut streams[index];
            stream.events.push(event);
            stream.version += 1;
        }
        Ok(streams)
    }
}
