use crate::modules::identity::core::events::UserEvent;
use crate::modules::identity::core::state::{User, UserState};

pub fn evolve(state: UserState, event: UserEvent) -> UserState {
    match (state, event) {
        (UserState::None, UserEvent::UserRegisteredV1(e)) => UserState::Registered(User {
            user_id: e.user_id,
            email: e.email,
            password_hash: e.password_hash,
            role: e.role,
            first_name: e.first_name,
            last_name: e.last_name,
            is_active: true,
            created_at: e.registered_at,
            updated_at: e.registered_at,
            last_login_at: None,
        }),
        (UserState::Registered(mut user), UserEvent::UserLoggedInV1(e)) => {
            user.last_login_at = Some(e.logged_in_at);
            user.updated_at = e.logged_in_at;
            UserState::Registered(user)
        }
        (UserState::Registered(mut user), UserEvent::UserDeactivatedV1(e)) => {
            user.is_active = false;
            user.updated_at = e.deactivated_at;
            UserState::Registered(user)
        }
        (UserState::Registered(mut user), UserEvent::UserActivatedV1(e)) => {
            user.is_active = true;
            user.updated_at = e.activated_at;
            UserState::Registered(user)
        }
        (UserState::Registered(mut user), UserEvent::UserPasswordChangedV1(e)) => {
            user.password_hash = e.password_hash;
            user.updated_at = e.changed_at;
            UserState::Registered(user)
        }
        (state, _) => state,
    }
}

#[cfg(test)]
mod user_evolve_tests {
    use super::*;
    use crate::modules::identity::core::events::v1::user_deactivated::UserDeactivatedV1;
    use crate::modules::identity::core::events::v1::user_logged_in::UserLoggedInV1;
    use crate::modules::identity::core::events::v1::user_registered::UserRegisteredV1;
    use crate::tests::fixtures::events::user_registered_v1::make_user_registered_v1_event;
    use rstest::{fixture, rstest};

    #[fixture]
    fn registered_event() -> UserRegisteredV1 {
        make_user_registered_v1_event()
    }

    #[rstest]
    fn it_should_evolve_the_state_to_registered(registered_event: UserRegisteredV1) {
        let state = evolve(
            UserState::None,
            UserEvent::UserRegisteredV1(registered_event.clone()),
        );
        let user = state.user().expect("expected Registered state");
        assert_eq!(user.user_id, registered_event.user_id);
        assert_eq!(user.email, registered_event.email);
        assert!(user.is_active);
        assert_eq!(user.created_at, registered_event.registered_at);
        assert_eq!(user.last_login_at, None);
    }

    #[rstest]
    fn it_should_record_the_last_login(registered_event: UserRegisteredV1) {
        let user_id = registered_event.user_id;
        let state = [
            UserEvent::UserRegisteredV1(registered_event),
            UserEvent::UserLoggedInV1(UserLoggedInV1 {
                user_id,
                logged_in_at: 1_700_000_100_000,
            }),
        ]
        .into_iter()
        .fold(UserState::None, evolve);
        assert_eq!(state.user().unwrap().last_login_at, Some(1_700_000_100_000));
    }

    #[rstest]
    fn it_should_deactivate_the_user(registered_event: UserRegisteredV1) {
        let user_id = registered_event.user_id;
        let state = [
            UserEvent::UserRegisteredV1(registered_event),
            UserEvent::UserDeactivatedV1(UserDeactivatedV1 {
                user_id,
                deactivated_at: 1_700_000_200_000,
            }),
        ]
        .into_iter()
        .fold(UserState::None, evolve);
        let user = state.user().unwrap();
        assert!(!user.is_active);
        assert_eq!(user.updated_at, 1_700_000_200_000);
    }

    #[rstest]
    fn it_should_ignore_events_for_an_unregistered_user(registered_event: UserRegisteredV1) {
        let state = evolve(
            UserState::None,
            UserEvent::UserDeactivatedV1(UserDeactivatedV1 {
                user_id: registered_event.user_id,
                deactivated_at: 1,
            }),
        );
        assert_eq!(state, UserState::None);
    }

    #[rstest]
    fn it_should_not_change_on_duplicate_registered_event(registered_event: UserRegisteredV1) {
        let registered = evolve(
            UserState::None,
            UserEvent::UserRegisteredV1(registered_event.clone()),
        );
        let next = evolve(
            registered.clone(),
            UserEvent::UserRegisteredV1(registered_event),
        );
        assert_eq!(next, registered, "state should be unchanged by fallback arm");
    }
}
