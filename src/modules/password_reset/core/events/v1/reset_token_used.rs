use crate::shared::core::primitives::{ResetTokenId, UserId};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct PasswordResetTokenUsedV1 {
    pub token_id: ResetTokenId,
    pub user_id: UserId,
    pub used_at: i64,
}
