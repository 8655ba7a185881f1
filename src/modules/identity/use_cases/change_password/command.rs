use crate::modules::identity::core::password::PasswordHash;
use crate::shared::core::primitives::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangePassword {
    pub user_id: UserId,
    pub password_hash: PasswordHash,
    pub changed_at: i64,
}
