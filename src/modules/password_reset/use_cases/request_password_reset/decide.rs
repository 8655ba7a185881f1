use crate::modules::password_reset::core::events::{
    ResetTokenEvent, v1::password_reset_requested::PasswordResetRequestedV1,
    v1::reset_token_revoked::PasswordResetTokenRevokedV1,
};
use crate::modules::password_reset::core::intents::ResetIntent;
use crate::modules::password_reset::core::state::ResetTokenState;
use crate::modules::password_reset::use_cases::request_password_reset::command::RequestPasswordReset;
use crate::shared::core::decision::Decision;
use crate::shared::core::primitives::{ResetTokenId, UserId};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Reset token {0} already issued")]
    AlreadyIssued(ResetTokenId),
}

/// The account the reset was requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub user_id: UserId,
    pub email: String,
}

pub fn decide_request_password_reset(
    state: &ResetTokenState,
    account: &Account,
    ttl_ms: i64,
    command: RequestPasswordReset,
) -> Decision<ResetTokenEvent, DecideError, ResetIntent> {
    if !matches!(state, ResetTokenState::None) {
        return Decision::rejected(DecideError::AlreadyIssued(command.token_id));
    }
    let expires_at = command.requested_at + ttl_ms;
    Decision::Accepted {
        events: vec![ResetTokenEvent::PasswordResetRequestedV1(
            PasswordResetRequestedV1 {
                token_id: command.token_id,
                user_id: account.user_id,
                token: command.token.clone(),
                expires_at,
                requested_at: command.requested_at,
            },
        )],
        intents: vec![ResetIntent::SendPasswordResetEmail {
            to: account.email.clone(),
            token: command.token,
            expires_at,
        }],
    }
}

/// Withdraws a still-valid token. Anything else is left as is.
pub fn decide_revoke_reset_token(
    state: &ResetTokenState,
    revoked_at: i64,
) -> Decision<ResetTokenEvent, DecideError> {
    match state.token() {
        Some(token) if token.is_valid(revoked_at) => {
            Decision::accepted(vec![ResetTokenEvent::PasswordResetTokenRevokedV1(
                PasswordResetTokenRevokedV1 {
                    token_id: token.token_id,
                    user_id: token.user_id,
                    revoked_at,
                },
            )])
        }
        _ => Decision::accepted(vec![]),
    }
}
