use std::convert::Infallible;

use crate::modules::password_reset::core::events::{
    ResetTokenEvent, v1::reset_token_purged::PasswordResetTokenPurgedV1,
};
use crate::modules::password_reset::core::state::ResetTokenState;
use crate::shared::core::decision::Decision;

pub fn decide_purge_expired_token(
    state: &ResetTokenState,
    now: i64,
) -> Decision<ResetTokenEvent, Infallible> {
    match state.token() {
        Some(token) if token.is_expired(now) => {
            Decision::accepted(vec![ResetTokenEvent::PasswordResetTokenPurgedV1(
                PasswordResetTokenPurgedV1 {
                    token_id: token.token_id,
                    purged_at: now,
                },
            )])
        }
        _ => Decision::accepted(vec![]),
    }
}
