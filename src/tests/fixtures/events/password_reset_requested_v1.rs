// Shared test fixture for PasswordResetRequestedV1.

use crate::modules::password_reset::core::events::v1::password_reset_requested::PasswordResetRequestedV1;
use crate::modules::password_reset::core::reset_token::ResetToken;
use crate::shared::core::primitives::ResetTokenId;
use crate::tests::fixtures::commands::register_user::RegisterUserBuilder;

pub fn make_password_reset_requested_v1_event() -> PasswordResetRequestedV1 {
    let requested_at = 1_700_000_000_000;
    PasswordResetRequestedV1 {
        token_id: ResetTokenId::parse("0192d1c4-5a3b-7c00-8000-0000000000f9").unwrap(),
        user_id: RegisterUserBuilder::new().build().user_id,
        token: ResetToken::parse("6f1c2a9e-3f7b-4d7e-9a51-0c8f2b9d4e11").unwrap(),
        expires_at: requested_at + 24 * 60 * 60 * 1000,
        requested_at,
    }
}
