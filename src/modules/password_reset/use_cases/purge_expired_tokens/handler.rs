use std::convert::Infallible;
use std::sync::Arc;

use crate::modules::password_reset::adapters::outbound::projections::ResetTokenReadModel;
use crate::modules::password_reset::core::events::ResetTokenEvent;
use crate::modules::password_reset::core::evolve::evolve;
use crate::modules::password_reset::core::state::stream_id;
use crate::modules::password_reset::use_cases::purge_expired_tokens::decide::decide_purge_expired_token;
use crate::shared::application::command_runner::execute;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

pub struct PurgeExpiredTokensHandler {
    topic: String,
    event_store: Arc<dyn EventStore<ResetTokenEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    read_model: Arc<dyn ResetTokenReadModel>,
}

impl PurgeExpiredTokensHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<ResetTokenEvent>>,
        outbox: Arc<dyn DomainOutbox>,
        read_model: Arc<dyn ResetTokenReadModel>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            read_model,
        }
    }

    /// Returns how many tokens were removed.
    pub async fn handle(&self, now: i64) -> Result<usize, ApplicationError<Infallible>> {
        let expired = self
            .read_model
            .list_expired(now)
            .await
            .map_err(ApplicationError::projection)?;

        let mut purged = 0;
        for row in expired {
            let committed = execute(
                &*self.event_store,
                &*self.outbox,
                &self.topic,
                &stream_id(&row.token_id),
                evolve,
                |state| decide_purge_expired_token(state, now),
            )
            .await?;
            self.read_model
                .project(&committed.state)
                .await
                .map_err(ApplicationError::projection)?;
            purged += committed.events.len();
        }
        Ok(purged)
    }
}

#[cfg(test)]
mod purge_expired_tokens_handler_tests {
    use super::*;
    use crate::modules::password_reset::adapters::outbound::projections::ResetTokenQueries;
    use crate::modules::password_reset::adapters::outbound::projections_in_memory::InMemoryResetTokenProjections;
    use crate::modules::password_reset::core::reset_token::ResetToken;
    use crate::modules::password_reset::core::state::ResetTokenState;
    use crate::shared::application::projector::StateProjection;
    use crate::shared::core::primitives::ResetTokenId;
    use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
    use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
    use crate::tests::fixtures::events::password_reset_requested_v1::make_password_reset_requested_v1_event;
    use rstest::rstest;

    async fn seed(
        store: &InMemoryEventStore<ResetTokenEvent>,
        projections: &InMemoryResetTokenProjections,
        expires_at: i64,
    ) -> ResetToken {
        let mut event = make_password_reset_requested_v1_event();
        event.token_id = ResetTokenId::new();
        event.token = ResetToken::generate();
        event.expires_at = expires_at;
        let token = event.token.clone();
        let stream_id = stream_id(&event.token_id);
        let event = ResetTokenEvent::PasswordResetRequestedV1(event);
        store
            .append(&stream_id, 0, std::slice::from_ref(&event))
            .await
            .unwrap();
        projections
            .project(&evolve(ResetTokenState::None, event))
            .await
            .unwrap();
        token
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_only_expired_tokens() {
        let store = Arc::new(InMemoryEventStore::<ResetTokenEvent>::new());
        let projections = Arc::new(InMemoryResetTokenProjections::new());
        let stale = seed(&store, &projections, 100).await;
        let fresh = seed(&store, &projections, 10_000).await;
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        let handler =
            PurgeExpiredTokensHandler::new("password-resets.v1", store, outbox.clone(), projections.clone());

        assert_eq!(handler.handle(5_000).await.unwrap(), 1);
        assert_eq!(handler.handle(5_000).await.unwrap(), 0);

        assert!(projections.find_by_token(stale.as_str()).await.unwrap().is_none());
        assert!(projections.find_by_token(fresh.as_str()).await.unwrap().is_some());
        assert_eq!(outbox.rows().await[0].event_type, "PasswordResetTokenPurged");
    }
}
