use crate::modules::identity::core::events::UserEvent;
use crate::modules::identity::core::events::v1::{
    user_activated::UserActivatedV1, user_deactivated::UserDeactivatedV1,
};
use crate::modules::identity::core::state::UserState;
use crate::modules::identity::use_cases::change_user_status::command::{
    ChangeUserStatus, UserStatus,
};
use crate::shared::core::decision::Decision;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("User not found")]
    NotFound,

    #[error("User is already active")]
    AlreadyActive,

    #[error("User is already deactivated")]
    AlreadyDeactivated,
}

pub fn decide_change_user_status(
    state: &UserState,
    command: ChangeUserStatus,
) -> Decision<UserEvent, DecideError> {
    let Some(user) = state.user() else {
        return Decision::rejected(DecideError::NotFound);
    };
    match (command.status, user.is_active) {
        (UserStatus::Active, true) => Decision::rejected(DecideError::AlreadyActive),
        (UserStatus::Deactivated, false) => Decision::rejected(DecideError::AlreadyDeactivated),
        (UserStatus::Active, false) => {
            Decision::accepted(vec![UserEvent::UserActivatedV1(UserActivatedV1 {
                user_id: user.user_id,
                activated_at: command.changed_at,
            })])
        }
        (UserStatus::Deactivated, true) => {
            Decision::accepted(vec![UserEvent::UserDeactivatedV1(UserDeactivatedV1 {
                user_id: user.user_id,
                deactivated_at: command.changed_at,
            })])
        }
    }
}
