use crate::modules::identity::core::password::PasswordError;
use crate::modules::password_reset::core::events::{
    ResetTokenEvent, v1::reset_token_used::PasswordResetTokenUsedV1,
};
use crate::modules::password_reset::core::reset_token::ResetToken;
use crate::modules::password_reset::core::state::{ResetTokenState, TokenRejection};
use crate::shared::core::decision::Decision;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Invalid reset token")]
    InvalidToken,

    #[error(transparent)]
    Rejected(#[from] TokenRejection),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error("User not found")]
    UserNotFound,
}

/// Marks the token used if it is the one presented and still valid.
pub fn decide_confirm_password_reset(
    state: &ResetTokenState,
    presented: &ResetToken,
    confirmed_at: i64,
) -> Decision<ResetTokenEvent, DecideError> {
    let Some(token) = state.token().filter(|token| &token.token == presented) else {
        return Decision::rejected(DecideError::InvalidToken);
    };
    if let Err(rejection) = token.check(confirmed_at) {
        return Decision::rejected(rejection.into());
    }
    Decision::accepted(vec![ResetTokenEvent::PasswordResetTokenUsedV1(
        PasswordResetTokenUsedV1 {
            token_id: token.token_id,
            user_id: token.user_id,
            used_at: confirmed_at,
        },
    )])
}
