use std::sync::Arc;

use crate::modules::identity::adapters::outbound::projections::UserQueries;
use crate::modules::identity::core::email_address::EmailAddress;
use crate::modules::password_reset::adapters::outbound::mailer::dispatch_intents;
use crate::modules::password_reset::adapters::outbound::projections::ResetTokenReadModel;
use crate::modules::password_reset::core::events::ResetTokenEvent;
use crate::modules::password_reset::core::evolve::evolve;
use crate::modules::password_reset::core::state::{PasswordResetToken, stream_id};
use crate::modules::password_reset::use_cases::request_password_reset::command::RequestPasswordReset;
use crate::modules::password_reset::use_cases::request_password_reset::decide::{
    Account, DecideError, decide_request_password_reset, decide_revoke_reset_token,
};
use crate::shared::application::command_runner::execute;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use crate::shared::infrastructure::mailer::Mailer;

#[derive(Debug, Clone)]
pub struct ResetSettings {
    pub token_ttl_ms: i64,
    pub mail_from: String,
}

pub struct RequestPasswordResetHandler {
    topic: String,
    event_store: Arc<dyn EventStore<ResetTokenEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    read_model: Arc<dyn ResetTokenReadModel>,
    users: Arc<dyn UserQueries>,
    mailer: Arc<dyn Mailer>,
    settings: ResetSettings,
}

impl RequestPasswordResetHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<ResetTokenEvent>>,
        outbox: Arc<dyn DomainOutbox>,
        read_model: Arc<dyn ResetTokenReadModel>,
        users: Arc<dyn UserQueries>,
        mailer: Arc<dyn Mailer>,
        settings: ResetSettings,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            read_model,
            users,
            mailer,
            settings,
        }
    }

    /// `Ok(None)` when no account matches; callers must not tell the two apart.
    pub async fn handle(
        &self,
        command: RequestPasswordReset,
    ) -> Result<Option<PasswordResetToken>, ApplicationError<DecideError>> {
        let Ok(email) = EmailAddress::parse(command.email.trim()) else {
            tracing::debug!("password reset requested for a malformed address");
            return Ok(None);
        };
        let Some(user) = self
            .users
            .find_by_email(email.as_str())
            .await
            .map_err(ApplicationError::projection)?
        else {
            tracing::debug!("password reset requested for an unknown address");
            return Ok(None);
        };

        self.revoke_outstanding(user.user_id, command.requested_at)
            .await?;

        let account = Account {
            user_id: user.user_id,
            email: user.email,
        };
        let ttl_ms = self.settings.token_ttl_ms;
        let stream_id = stream_id(&command.token_id);
        let committed = execute(
            &*self.event_store,
            &*self.outbox,
            &self.topic,
            &stream_id,
            evolve,
            |state| decide_request_password_reset(state, &account, ttl_ms, command),
        )
        .await?;

        self.read_model
            .project(&committed.state)
            .await
            .map_err(ApplicationError::projection)?;

        if let Err(error) =
            dispatch_intents(&*self.mailer, &self.settings.mail_from, committed.intents).await
        {
            tracing::warn!(%error, user_id = %account.user_id, "password reset mail not sent");
        }

        committed
            .state
            .token()
            .cloned()
            .map(Some)
            .ok_or_else(|| ApplicationError::Unexpected("reset token missing after issue".into()))
    }

    async fn revoke_outstanding(
        &self,
        user_id: UserId,
        now: i64,
    ) -> Result<(), ApplicationError<DecideError>> {
        let outstanding = self
            .read_model
            .list_by_user(user_id)
            .await
            .map_err(ApplicationError::projection)?;

        for row in outstanding.into_iter().filter(|row| row.is_valid(now)) {
            let committed = execute(
                &*self.event_store,
                &*self.outbox,
                &self.topic,
                &stream_id(&row.token_id),
                evolve,
                |state| decide_revoke_reset_token(state, now),
            )
            .await?;
            self.read_model
                .project(&committed.state)
                .await
                .map_err(ApplicationError::projection)?;
        }
        Ok(())
    }
}
