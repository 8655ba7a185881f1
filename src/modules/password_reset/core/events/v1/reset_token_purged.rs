use crate::shared::core::primitives::ResetTokenId;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct PasswordResetTokenPurgedV1 {
    pub token_id: ResetTokenId,
    pub purged_at: i64,
}
