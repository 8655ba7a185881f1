use crate::modules::identity::core::password::PasswordHash;
use crate::shared::core::primitives::UserId;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct UserPasswordChangedV1 {
    pub user_id: UserId,
    pub password_hash: PasswordHash,
    pub changed_at: i64,
}
