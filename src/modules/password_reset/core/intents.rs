use crate::modules::password_reset::core::reset_token::ResetToken;

/// Side effects produced alongside an accepted reset request. Dispatched
/// once the events are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetIntent {
    SendPasswordResetEmail {
        to: String,
        token: ResetToken,
        expires_at: i64,
    },
}
