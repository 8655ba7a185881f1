// Event payload: UserRegisteredV1.
//
// Records that an account was created. New accounts start active.
// Timestamps are epoch milliseconds.

use crate::modules::identity::core::email_address::EmailAddress;
use crate::modules::identity::core::password::PasswordHash;
use crate::shared::core::primitives::{UserId, UserRole};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct UserRegisteredV1 {
    pub user_id: UserId,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub registered_at: i64,
}
