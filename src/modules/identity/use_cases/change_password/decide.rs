use crate::modules::identity::core::events::{
    UserEvent, v1::user_password_changed::UserPasswordChangedV1,
};
use crate::modules::identity::core::state::UserState;
use crate::modules::identity::use_cases::change_password::command::ChangePassword;
use crate::shared::core::decision::Decision;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("User not found")]
    NotFound,
}

pub fn decide_change_password(
    state: &UserState,
    command: ChangePassword,
) -> Decision<UserEvent, DecideError> {
    match state.user() {
        None => Decision::rejected(DecideError::NotFound),
        Some(user) => Decision::accepted(vec![UserEvent::UserPasswordChangedV1(
            UserPasswordChangedV1 {
                user_id: user.user_id,
                password_hash: command.password_hash,
                changed_at: command.changed_at,
            },
        )]),
    }
}
