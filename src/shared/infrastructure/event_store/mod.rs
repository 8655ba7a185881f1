use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for EventStoreError {
    fn from(value: sqlx::Error) -> Self {
        EventStoreError::Backend(value.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct LoadedStream<E> {
    pub events: Vec<E>,
    pub version: i64,
}

#[derive(Debug, Clone)]
pub struct StoredStream<E> {
    pub stream_id: String,
    pub events: Vec<E>,
    pub version: i64,
}

#[async_trait]
pub trait EventStore<Event: Clone + Send + Sync + 'static>: Send + Sync {
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError>;

    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError>;

    /// Every stream in first-append order. Used to rebuild read models.
    async fn load_all(&self) -> Result<Vec<StoredStream<Event>>, EventStoreError>;
}

pub mod in_memory;
pub mod postgres;
