use thiserror::Error;

use crate::modules::password_reset::core::reset_token::ResetToken;
use crate::shared::core::primitives::{ResetTokenId, UserId};

pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

pub fn stream_id(token_id: &ResetTokenId) -> String {
    format!("PasswordResetToken-{token_id}")
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum TokenRejection {
    #[error("Reset token has expired")]
    Expired,

    #[error("Reset token has already been used")]
    AlreadyUsed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordResetToken {
    pub token_id: ResetTokenId,
    pub user_id: UserId,
    pub token: ResetToken,
    pub expires_at: i64,
    pub used_at: Option<i64>,
    pub revoked_at: Option<i64>,
    pub created_at: i64,
}

impl PasswordResetToken {
    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expires_at
    }

    pub fn is_used(&self) -> bool {
        self.used_at.is_some()
    }

    pub fn is_valid(&self, now: i64) -> bool {
        !self.is_used() && self.revoked_at.is_none() && !self.is_expired(now)
    }

    /// Expiry is reported before use.
    pub fn check(&self, now: i64) -> Result<(), TokenRejection> {
        if self.is_expired(now) {
            return Err(TokenRejection::Expired);
        }
        if self.is_used() || self.revoked_at.is_some() {
            return Err(TokenRejection::AlreadyUsed);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResetTokenState {
    #[default]
    None,
    Issued(PasswordResetToken),
    Purged(ResetTokenId),
}

impl ResetTokenState {
    pub fn token(&self) -> Option<&PasswordResetToken> {
        match self {
            ResetTokenState::Issued(token) => Some(token),
            ResetTokenState::None | ResetTokenState::Purged(_) => None,
        }
    }
}

#[cfg(test)]
mod reset_token_state_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn token() -> PasswordResetToken {
        PasswordResetToken {
            token_id: ResetTokenId::new(),
            user_id: UserId::new(),
            token: ResetToken::generate(),
            expires_at: 1_000,
            used_at: None,
            revoked_at: None,
            created_at: 0,
        }
    }

    #[rstest]
    #[case(999, true)]
    #[case(1_000, true)]
    #[case(1_001, false)]
    fn it_should_expire_strictly_after_the_deadline(
        token: PasswordResetToken,
        #[case] now: i64,
        #[case] valid: bool,
    ) {
        assert_eq!(token.is_valid(now), valid);
    }

    #[rstest]
    fn it_should_report_expiry_before_use(mut token: PasswordResetToken) {
        token.used_at = Some(500);
        assert_eq!(token.check(600), Err(TokenRejection::AlreadyUsed));
        assert_eq!(token.check(2_000), Err(TokenRejection::Expired));
    }

    #[rstest]
    fn it_should_treat_a_revoked_token_as_used(mut token: PasswordResetToken) {
        token.revoked_at = Some(10);
        assert!(!token.is_valid(20));
        assert_eq!(
            token.check(20).unwrap_err().to_string(),
            "Reset token has already been used"
        );
    }
}
