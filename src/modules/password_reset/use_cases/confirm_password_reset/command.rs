use crate::modules::password_reset::core::reset_token::ResetToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPasswordReset {
    pub token: ResetToken,
    pub new_password: String,
    pub confirmed_at: i64,
}
