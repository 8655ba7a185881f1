use std::sync::Arc;

use crate::modules::identity::core::password::PasswordHasher;
use crate::modules::identity::use_cases::change_password::command::ChangePassword;
use crate::modules::identity::use_cases::change_password::handler::ChangePasswordHandler;
use crate::modules::password_reset::adapters::outbound::projections::ResetTokenReadModel;
use crate::modules::password_reset::core::events::ResetTokenEvent;
use crate::modules::password_reset::core::evolve::evolve;
use crate::modules::password_reset::core::state::stream_id;
use crate::modules::password_reset::use_cases::confirm_password_reset::command::ConfirmPasswordReset;
use crate::modules::password_reset::use_cases::confirm_password_reset::decide::{
    DecideError, decide_confirm_password_reset,
};
use crate::shared::application::command_runner::execute;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

pub struct ConfirmPasswordResetHandler {
    topic: String,
    event_store: Arc<dyn EventStore<ResetTokenEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    read_model: Arc<dyn ResetTokenReadModel>,
    change_password: Arc<ChangePasswordHandler>,
    hasher: PasswordHasher,
}

impl ConfirmPasswordResetHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<ResetTokenEvent>>,
        outbox: Arc<dyn DomainOutbox>,
        read_model: Arc<dyn ResetTokenReadModel>,
        change_password: Arc<ChangePasswordHandler>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            read_model,
            change_password,
            hasher,
        }
    }

    /// Burns the token, then stores the new hash. Returns the account whose
    /// password changed.
    pub async fn handle(
        &self,
        command: ConfirmPasswordReset,
    ) -> Result<UserId, ApplicationError<DecideError>> {
        let row = self
            .read_model
            .find_by_token(command.token.as_str())
            .await
            .map_err(ApplicationError::projection)?
            .ok_or(ApplicationError::Domain(DecideError::InvalidToken))?;

        let password_hash = self
            .hasher
            .hash_checked(&command.new_password)
            .await
            .map_err(|e| ApplicationError::Domain(e.into()))?;

        let committed = execute(
            &*self.event_store,
            &*self.outbox,
            &self.topic,
            &stream_id(&row.token_id),
            evolve,
            |state| decide_confirm_password_reset(state, &command.token, command.confirmed_at),
        )
        .await?;

        self.read_model
            .project(&committed.state)
            .await
            .map_err(ApplicationError::projection)?;

        self.change_password
            .handle(ChangePassword {
                user_id: row.user_id,
                password_hash,
                changed_at: command.confirmed_at,
            })
            .await
            .map_err(|e| e.map_domain(|_| DecideError::UserNotFound))?;

        Ok(row.user_id)
    }
}
