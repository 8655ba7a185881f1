use crate::modules::identity::core::email_address::EmailAddress;
use crate::modules::identity::core::password::PasswordHash;
use crate::shared::core::primitives::{UserId, UserRole};

pub fn stream_id(user_id: &UserId) -> String {
    format!("User-{user_id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
    pub last_login_at: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UserState {
    #[default]
    None,
    Registered(User),
}

impl UserState {
    pub fn user(&self) -> Option<&User> {
        match self {
            UserState::Registered(user) => Some(user),
            UserState::None => None,
        }
    }
}
