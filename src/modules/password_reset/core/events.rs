pub mod v1 {
    pub mod password_reset_requested;
    pub mod reset_token_purged;
    pub mod reset_token_revoked;
    pub mod reset_token_used;
}

use crate::shared::core::domain_event::DomainEvent;
use v1::password_reset_requested::PasswordResetRequestedV1;
use v1::reset_token_purged::PasswordResetTokenPurgedV1;
use v1::reset_token_revoked::PasswordResetTokenRevokedV1;
use v1::reset_token_used::PasswordResetTokenUsedV1;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ResetTokenEvent {
    PasswordResetRequestedV1(PasswordResetRequestedV1),
    PasswordResetTokenUsedV1(PasswordResetTokenUsedV1),
    PasswordResetTokenRevokedV1(PasswordResetTokenRevokedV1),
    PasswordResetTokenPurgedV1(PasswordResetTokenPurgedV1),
}

impl DomainEvent for ResetTokenEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ResetTokenEvent::PasswordResetRequestedV1(_) => "PasswordResetRequested",
            ResetTokenEvent::PasswordResetTokenUsedV1(_) => "PasswordResetTokenUsed",
            ResetTokenEvent::PasswordResetTokenRevokedV1(_) => "PasswordResetTokenRevoked",
            ResetTokenEvent::PasswordResetTokenPurgedV1(_) => "PasswordResetTokenPurged",
        }
    }

    fn occurred_at(&self) -> i64 {
        match self {
            ResetTokenEvent::PasswordResetRequestedV1(e) => e.requested_at,
            ResetTokenEvent::PasswordResetTokenUsedV1(e) => e.used_at,
            ResetTokenEvent::PasswordResetTokenRevokedV1(e) => e.revoked_at,
            ResetTokenEvent::PasswordResetTokenPurgedV1(e) => e.purged_at,
        }
    }
}
