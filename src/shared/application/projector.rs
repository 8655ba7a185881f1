use async_trait::async_trait;

use crate::shared::core::domain_event::DomainEvent;
use crate::shared::infrastructure::event_store::EventStore;

/// A read model kept in step with an aggregate's folded state.
#[async_trait]
pub trait StateProjection<State: Send + Sync>: Send + Sync {
    async fn project(&self, state: &State) -> anyhow::Result<()>;
}

/// Rebuilds a read model from every stream in the store.
pub async fn replay<Event, State, Store, Projection>(
    event_store: &Store,
    evolve: fn(State, Event) -> State,
    projection: &Projection,
) -> anyhow::Result<usize>
where
    Event: DomainEvent,
    State: Default + Send + Sync,
    Store: EventStore<Event> + ?Sized,
    Projection: StateProjection<State> + ?Sized,
{
    let streams = event_store.load_all().await?;
    for stream in &streams {
        let state = stream
            .events
            .iter()
            .cloned()
            .fold(State::default(), evolve);
        projection.project(&state).await?;
    }
    Ok(streams.len())
}
