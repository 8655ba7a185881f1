use chrono::Utc;

use crate::modules::identity::core::email_address::EmailAddress;
use crate::modules::identity::use_cases::register_user::command::RegisterUser;
use crate::shared::core::primitives::{UserId, UserRole};
use crate::shell::config::BootstrapAdmin;
use crate::shell::state::AppState;

#[derive(Debug, PartialEq, Eq)]
pub enum Seeded {
    Created(UserId),
    AlreadyPresent,
}

/// Registers the configured administrator unless that email is already taken.
pub async fn seed_admin(state: &AppState, admin: &BootstrapAdmin) -> anyhow::Result<Seeded> {
    let email = EmailAddress::parse(&admin.email)?;
    if state.users.find_by_email(email.as_str()).await?.is_some() {
        return Ok(Seeded::AlreadyPresent);
    }

    let password_hash = state.password_hasher.hash_checked(&admin.password).await?;
    let user = state
        .register_user
        .handle(RegisterUser {
            user_id: UserId::new(),
            email,
            password_hash,
            role: UserRole::Admin,
            first_name: "System".into(),
            last_name: "Administrator".into(),
            registered_at: Utc::now().timestamp_millis(),
        })
        .await?;
    tracing::info!(user_id = %user.user_id, "bootstrap administrator registered");
    Ok(Seeded::Created(user.user_id))
}

#[cfg(test)]
mod seed_admin_tests {
    use super::*;
    use crate::modules::identity::use_cases::login::command::Login;
    use crate::tests::fixtures::app::{TestApp, test_app};
    use rstest::{fixture, rstest};

    fn admin() -> BootstrapAdmin {
        BootstrapAdmin {
            email: "root@school.edu".into(),
            password: "bootstrap-secret".into(),
        }
    }

    #[fixture]
    fn before_each() -> TestApp {
        test_app()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_register_an_admin_that_can_log_in(before_each: TestApp) {
        let seeded = seed_admin(&before_each.state, &admin()).await.unwrap();
        assert!(matches!(seeded, Seeded::Created(_)));

        let user = before_each
            .state
            .login
            .handle(Login {
                email: "root@school.edu".into(),
                password: "bootstrap-secret".into(),
                logged_in_at: 1_700_000_000_000,
            })
            .await
            .unwrap();
        assert_eq!(user.role, UserRole::Admin);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_be_idempotent(before_each: TestApp) {
        seed_admin(&before_each.state, &admin()).await.unwrap();

        let again = seed_admin(&before_each.state, &admin()).await.unwrap();

        assert_eq!(again, Seeded::AlreadyPresent);
        assert_eq!(before_each.state.list_users.count().await.unwrap(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_a_weak_password(before_each: TestApp) {
        let weak = BootstrapAdmin {
            password: "short".into(),
            ..admin()
        };

        assert!(seed_admin(&before_each.state, &weak).await.is_err());
    }
}
