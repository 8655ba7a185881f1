use crate::shared::infrastructure::event_store::{
    EventStore, EventStoreError, LoadedStream, StoredStream,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
struct Streams<Event> {
    by_id: HashMap<String, Vec<Event>>,
    order: Vec<String>,
}

pub struct InMemoryEventStore<Event: Clone + Send + Sync + 'static> {
    inner: RwLock<Streams<Event>>,
    is_offline: AtomicBool,
    delay_append_ms: AtomicU64,
}

impl<Event: Clone + Send + Sync + 'static> Default for InMemoryEventStore<Event> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Streams {
                by_id: HashMap::new(),
                order: Vec::new(),
            }),
            is_offline: AtomicBool::new(false),
            delay_append_ms: AtomicU64::new(0),
        }
    }
}

impl<Event: Clone + Send + Sync + 'static> InMemoryEventStore<Event> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    /// Widens the window between the version check and the write so tests can
    /// race two appends against the same stream.
    pub fn set_delay_append_ms(&self, ms: u64) {
        self.delay_append_ms.store(ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<Event> EventStore<Event> for InMemoryEventStore<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        let events = guard.by_id.get(stream_id).cloned().unwrap_or_default();
        let version = events.len() as i64;
        Ok(LoadedStream { events, version })
    }

    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        let actual = {
            let guard = self.inner.read().await;
            guard.by_id.get(stream_id).map(|v| v.len()).unwrap_or(0) as i64
        };
        if actual != expected_version {
            return Err(EventStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }

        let delay = self.delay_append_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.inner.write().await;
        let Streams { by_id, order } = &mut *guard;
        let entry = by_id.entry(stream_id.to_string()).or_insert_with(|| {
            order.push(stream_id.to_string());
            Vec::new()
        });
        let actual = entry.len() as i64;
        if actual != expected_version {
            return Err(EventStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        entry.extend_from_slice(new_events);
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<StoredStream<Event>>, EventStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .order
            .iter()
            .filter_map(|stream_id| {
                guard.by_id.get(stream_id).map(|events| StoredStream {
                    stream_id: stream_id.clone(),
                    version: events.len() as i64,
                    events: events.clone(),
                })
            })
            .collect())
    }
}
