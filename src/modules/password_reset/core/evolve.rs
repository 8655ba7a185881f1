use crate::modules::password_reset::core::events::ResetTokenEvent;
use crate::modules::password_reset::core::state::{PasswordResetToken, ResetTokenState};

pub fn evolve(state: ResetTokenState, event: ResetTokenEvent) -> ResetTokenState {
    match (state, event) {
        (ResetTokenState::None, ResetTokenEvent::PasswordResetRequestedV1(e)) => {
            ResetTokenState::Issued(PasswordResetToken {
                token_id: e.token_id,
                user_id: e.user_id,
                token: e.token,
                expires_at: e.expires_at,
                used_at: None,
                revoked_at: None,
                created_at: e.requested_at,
            })
        }
        (ResetTokenState::Issued(mut token), ResetTokenEvent::PasswordResetTokenUsedV1(e)) => {
            token.used_at = Some(e.used_at);
            ResetTokenState::Issued(token)
        }
        (ResetTokenState::Issued(mut token), ResetTokenEvent::PasswordResetTokenRevokedV1(e)) => {
            token.revoked_at = Some(e.revoked_at);
            ResetTokenState::Issued(token)
        }
        (ResetTokenState::Issued(token), ResetTokenEvent::PasswordResetTokenPurgedV1(_)) => {
            ResetTokenState::Purged(token.token_id)
        }
        (state, _) => state,
    }
}
