use serde::Serialize;
use serde::de::DeserializeOwned;

/// Metadata every persisted event exposes to the event store and the outbox.
pub trait DomainEvent: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    fn event_type(&self) -> &'static str;

    fn event_version(&self) -> i32 {
        1
    }

    /// Epoch milliseconds.
    fn occurred_at(&self) -> i64;
}
