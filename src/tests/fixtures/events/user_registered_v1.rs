// Shared test fixture for UserRegisteredV1.

use crate::modules::identity::core::events::v1::user_registered::UserRegisteredV1;
use crate::tests::fixtures::commands::register_user::RegisterUserBuilder;

/// Canonical registration event for tests.
pub fn make_user_registered_v1_event() -> UserRegisteredV1 {
    let command = RegisterUserBuilder::new().build();
    UserRegisteredV1 {
        user_id: command.user_id,
        email: command.email,
        password_hash: command.password_hash,
        role: command.role,
        first_name: command.first_name,
        last_name: command.last_name,
        registered_at: command.registered_at,
    }
}
