use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::{UserId, UserRole};

/// JWT payload. `upn` carries the email, `groups` the role names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub upn: String,
    #[serde(default)]
    pub groups: Vec<String>,
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

/// The user a token is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
}
