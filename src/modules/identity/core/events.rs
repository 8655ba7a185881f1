pub mod v1 {
    pub mod user_activated;
    pub mod user_deactivated;
    pub mod user_logged_in;
    pub mod user_password_changed;
    pub mod user_registered;
}

use crate::shared::core::domain_event::DomainEvent;
use v1::{
    user_activated::UserActivatedV1, user_deactivated::UserDeactivatedV1,
    user_logged_in::UserLoggedInV1, user_password_changed::UserPasswordChangedV1,
    user_registered::UserRegisteredV1,
};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum UserEvent {
    UserRegisteredV1(UserRegisteredV1),
    UserLoggedInV1(UserLoggedInV1),
    UserDeactivatedV1(UserDeactivatedV1),
    UserActivatedV1(UserActivatedV1),
    UserPasswordChangedV1(UserPasswordChangedV1),
}

impl DomainEvent for UserEvent {
    fn event_type(&self) -> &'static str {
        match self {
            UserEvent::UserRegisteredV1(_) => "UserRegistered",
            UserEvent::UserLoggedInV1(_) => "UserLoggedIn",
            UserEvent::UserDeactivatedV1(_) => "UserDeactivated",
            UserEvent::UserActivatedV1(_) => "UserActivated",
            UserEvent::UserPasswordChangedV1(_) => "UserPasswordChanged",
        }
    }

    fn occurred_at(&self) -> i64 {
        match self {
            UserEvent::UserRegisteredV1(e) => e.registered_at,
            UserEvent::UserLoggedInV1(e) => e.logged_in_at,
            UserEvent::UserDeactivatedV1(e) => e.deactivated_at,
            UserEvent::UserActivatedV1(e) => e.activated_at,
            UserEvent::UserPasswordChangedV1(e) => e.changed_at,
        }
    }
}
