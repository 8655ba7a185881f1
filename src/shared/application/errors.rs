use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shared::infrastructure::intent_outbox::OutboxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError<Reason> {
    #[error(transparent)]
    EventStore(#[from] EventStoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error("projection failed: {0}")]
    Projection(String),

    #[error("domain rejected: {0}")]
    Domain(Reason),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl<Reason> ApplicationError<Reason> {
    pub fn map_domain<Other>(self, f: impl FnOnce(Reason) -> Other) -> ApplicationError<Other> {
        match self {
            ApplicationError::EventStore(e) => ApplicationError::EventStore(e),
            ApplicationError::Outbox(e) => ApplicationError::Outbox(e),
            ApplicationError::Projection(m) => ApplicationError::Projection(m),
            ApplicationError::Domain(reason) => ApplicationError::Domain(f(reason)),
            ApplicationError::Unexpected(m) => ApplicationError::Unexpected(m),
        }
    }

    pub fn projection(error: anyhow::Error) -> Self {
        ApplicationError::Projection(error.to_string())
    }
}
