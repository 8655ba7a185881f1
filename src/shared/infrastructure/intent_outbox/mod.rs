use crate::shared::core::domain_event::DomainEvent;
use async_trait::async_trait;
use serde_json::Value as Json;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct OutboxRow {
    pub topic: String,
    pub event_type: String,
    pub event_version: i32,
    pub stream_id: String,
    pub stream_version: i64,
    pub occurred_at: i64,
    pub payload: Json,
}

#[derive(Debug, Error)]
pub enum OutboxError {
    #[error("duplicate outbox row for stream {stream_id} v{stream_version}")]
    Duplicate {
        stream_id: String,
        stream_version: i64,
    },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait DomainOutbox: Send + Sync {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError>;
}

/// Enqueue freshly appended events. `starting_version` is the stream version
/// before the append; event `i` lands at `starting_version + i + 1`.
pub async fn enqueue_events<E, O>(
    outbox: &O,
    topic: &str,
    stream_id: &str,
    starting_version: i64,
    events: &[E],
) -> Result<(), OutboxError>
where
    E: DomainEvent,
    O: DomainOutbox + ?Sized,
{
    for (i, event) in events.iter().enumerate() {
        let payload =
            serde_json::to_value(event).map_err(|e| OutboxError::Validation(e.to_string()))?;
        outbox
            .enqueue(OutboxRow {
                topic: topic.to_string(),
                event_type: event.event_type().to_string(),
                event_version: event.event_version(),
                stream_id: stream_id.to_string(),
                stream_version: starting_version + i as i64 + 1,
                occurred_at: event.occurred_at(),
                payload,
            })
            .await?;
    }
    Ok(())
}

pub mod in_memory;
pub mod postgres;
