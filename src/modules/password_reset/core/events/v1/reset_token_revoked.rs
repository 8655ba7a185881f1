use crate::shared::core::primitives::{ResetTokenId, UserId};

/// Superseded by a newer request for the same account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct PasswordResetTokenRevokedV1 {
    pub token_id: ResetTokenId,
    pub user_id: UserId,
    pub revoked_at: i64,
}
