use crate::modules::identity::core::events::{UserEvent, v1::user_registered::UserRegisteredV1};
use crate::modules::identity::core::state::UserState;
use crate::modules::identity::use_cases::register_user::command::RegisterUser;
use crate::shared::core::decision::Decision;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("User with email {0} already exists")]
    AlreadyExists(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

pub fn decide_register_user(
    state: &UserState,
    email_taken: bool,
    command: RegisterUser,
) -> Decision<UserEvent, DecideError> {
    if email_taken || matches!(state, UserState::Registered(_)) {
        return Decision::rejected(DecideError::AlreadyExists(command.email.to_string()));
    }
    if command.first_name.trim().is_empty() {
        return Decision::rejected(DecideError::MissingField("firstName"));
    }
    if command.last_name.trim().is_empty() {
        return Decision::rejected(DecideError::MissingField("lastName"));
    }
    Decision::accepted(vec![UserEvent::UserRegisteredV1(UserRegisteredV1 {
        user_id: command.user_id,
        email: command.email,
        password_hash: command.password_hash,
        role: command.role,
        first_name: command.first_name.trim().to_string(),
        last_name: command.last_name.trim().to_string(),
        registered_at: command.registered_at,
    })])
}
