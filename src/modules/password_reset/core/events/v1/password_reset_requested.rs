// Event payload: PasswordResetRequestedV1.
//
// A token was issued for an account. Expiry and timestamps are epoch
// milliseconds.

use crate::modules::password_reset::core::reset_token::ResetToken;
use crate::shared::core::primitives::{ResetTokenId, UserId};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct PasswordResetRequestedV1 {
    pub token_id: ResetTokenId,
    pub user_id: UserId,
    pub token: ResetToken,
    pub expires_at: i64,
    pub requested_at: i64,
}
