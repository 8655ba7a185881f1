use serde::{Deserialize, Serialize};

use crate::modules::identity::core::state::UserState;
use crate::shared::core::primitives::{UserId, UserRole};

/// Read model row. Credentials stay in the event stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    pub user_id: UserId,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub created_at: i64,
    pub last_login_at: Option<i64>,
}

pub enum Mutation {
    Upsert(UserRow),
}

pub fn apply(state: &UserState) -> Vec<Mutation> {
    match state {
        UserState::None => vec![],
        UserState::Registered(user) => vec![Mutation::Upsert(UserRow {
            user_id: user.user_id,
            email: user.email.as_str().to_string(),
            role: user.role,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            is_active: user.is_active,
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        })],
    }
}
