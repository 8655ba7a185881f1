use crate::shared::application::errors::ApplicationError;
use crate::shared::core::decision::Decision;
use crate::shared::core::domain_event::DomainEvent;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, enqueue_events};

/// Result of a command that went through load, decide, append and enqueue.
#[derive(Debug)]
pub struct Committed<State, Event, Intent> {
    pub state: State,
    pub version: i64,
    pub events: Vec<Event>,
    pub intents: Vec<Intent>,
}

/// Folds the stream into its current state and version.
pub async fn rehydrate<Event, State, Store>(
    event_store: &Store,
    stream_id: &str,
    evolve: fn(State, Event) -> State,
) -> Result<(State, i64), EventStoreError>
where
    Event: DomainEvent,
    State: Default,
    Store: EventStore<Event> + ?Sized,
{
    let stream = event_store.load(stream_id).await?;
    let state = stream.events.into_iter().fold(State::default(), evolve);
    Ok((state, stream.version))
}

pub async fn execute<Event, State, Reason, Intent, Store, Outbox, F>(
    event_store: &Store,
    outbox: &Outbox,
    topic: &str,
    stream_id: &str,
    evolve: fn(State, Event) -> State,
    decide: F,
) -> Result<Committed<State, Event, Intent>, ApplicationError<Reason>>
where
    Event: DomainEvent,
    State: Default,
    Store: EventStore<Event> + ?Sized,
    Outbox: DomainOutbox + ?Sized,
    F: FnOnce(&State) -> Decision<Event, Reason, Intent>,
{
    let (state, starting_version) = rehydrate(event_store, stream_id, evolve).await?;

    match decide(&state) {
        Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
        Decision::Accepted { events, intents } => {
            if !events.is_empty() {
                event_store
                    .append(stream_id, starting_version, &events)
                    .await?;
                enqueue_events(outbox, topic, stream_id, starting_version, &events).await?;
            }
            let version = starting_version + events.len() as i64;
            let state = events.iter().cloned().fold(state, evolve);
            Ok(Committed {
                state,
                version,
                events,
                intents,
            })
        }
    }
}
