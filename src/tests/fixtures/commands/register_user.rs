// Shared test fixture for the RegisterUser command.

use serde::Deserialize;
use std::sync::LazyLock;

use crate::modules::identity::core::email_address::EmailAddress;
use crate::modules::identity::core::password::{PasswordHash, PasswordHasher};
use crate::modules::identity::use_cases::register_user::command::RegisterUser;
use crate::shared::core::primitives::{UserId, UserRole};

pub const FIXTURE_PASSWORD: &str = "password123";

// Cost 4 keeps bcrypt fast enough for unit tests.
pub static FIXTURE_PASSWORD_HASH: LazyLock<PasswordHash> = LazyLock::new(|| {
    PasswordHasher::new(4)
        .hash(FIXTURE_PASSWORD)
        .expect("fixture password hashes")
});

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserDto {
    pub user_id: String,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
}

pub struct RegisterUserBuilder {
    inner: RegisterUser,
}

impl Default for RegisterUserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterUserBuilder {
    pub fn new() -> Self {
        let dto: RegisterUserDto =
            serde_json::from_str(include_str!("json/register_user.json")).unwrap();
        Self {
            inner: RegisterUser {
                user_id: UserId::parse(&dto.user_id).unwrap(),
                email: EmailAddress::parse(&dto.email).unwrap(),
                password_hash: FIXTURE_PASSWORD_HASH.clone(),
                role: dto.role,
                first_name: dto.first_name,
                last_name: dto.last_name,
                registered_at: 1_700_000_000_000,
            },
        }
    }

    pub fn user_id(mut self, v: UserId) -> Self {
        self.inner.user_id = v;
        self
    }

    pub fn email(mut self, v: &str) -> Self {
        self.inner.email = EmailAddress::parse(v).unwrap();
        self
    }

    pub fn role(mut self, v: UserRole) -> Self {
        self.inner.role = v;
        self
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.inner.first_name = v.into();
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.inner.last_name = v.into();
        self
    }

    pub fn registered_at(mut self, v: i64) -> Self {
        self.inner.registered_at = v;
        self
    }

    pub fn build(self) -> RegisterUser {
        self.inner
    }
}

#[cfg(test)]
mod register_user_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_the_json_fixture() {
        let built = RegisterUserBuilder::default().build();
        assert_eq!(built.email.as_str(), "teacher@school.edu");
        assert_eq!(built.role, UserRole::Teacher);
        assert_eq!(built.registered_at, 1_700_000_000_000);
        assert!(PasswordHasher::new(4).verify(FIXTURE_PASSWORD, &built.password_hash));
    }

    #[rstest]
    fn it_should_let_setters_override_fields() {
        let id = UserId::new();
        let built = RegisterUserBuilder::new()
            .user_id(id)
            .email("parent@home.org")
            .role(UserRole::Parent)
            .first_name("Pat")
            .last_name("Smith")
            .registered_at(42)
            .build();
        assert_eq!(built.user_id, id);
        assert_eq!(built.email.as_str(), "parent@home.org");
        assert_eq!(built.role, UserRole::Parent);
        assert_eq!(built.first_name, "Pat");
        assert_eq!(built.last_name, "Smith");
        assert_eq!(built.registered_at, 42);
    }
}
