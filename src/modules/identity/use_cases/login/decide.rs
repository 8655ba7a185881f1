use crate::modules::identity::core::events::{UserEvent, v1::user_logged_in::UserLoggedInV1};
use crate::modules::identity::core::state::UserState;
use crate::shared::core::decision::Decision;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account is deactivated")]
    AccountDeactivated,
}

/// Deactivation is reported before the password is considered.
pub fn decide_login(
    state: &UserState,
    password_matches: bool,
    logged_in_at: i64,
) -> Decision<UserEvent, DecideError> {
    let Some(user) = state.user() else {
        return Decision::rejected(DecideError::InvalidCredentials);
    };
    if !user.is_active {
        return Decision::rejected(DecideError::AccountDeactivated);
    }
    if !password_matches {
        return Decision::rejected(DecideError::InvalidCredentials);
    }
    Decision::accepted(vec![UserEvent::UserLoggedInV1(UserLoggedInV1 {
        user_id: user.user_id,
        logged_in_at,
    })])
}
