use crate::modules::identity::core::email_address::EmailAddress;
use crate::modules::identity::core::password::PasswordHash;
use crate::shared::core::primitives::{UserId, UserRole};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUser {
    pub user_id: UserId,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub registered_at: i64,
}
