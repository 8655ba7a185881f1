use crate::modules::password_reset::core::reset_token::ResetToken;
use crate::shared::core::primitives::ResetTokenId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPasswordReset {
    pub token_id: ResetTokenId,
    pub token: ResetToken,
    /// As typed by the caller; may be malformed or unknown.
    pub email: String,
    pub requested_at: i64,
}
