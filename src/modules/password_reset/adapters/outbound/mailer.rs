use chrono::DateTime;

use crate::modules::password_reset::core::intents::ResetIntent;
use crate::shared::infrastructure::mailer::{Mailer, MailerError, OutgoingMail};

pub const RESET_MAIL_SUBJECT: &str = "Password reset request";

/// Translate reset intents into mail and hand them to the transport.
pub async fn dispatch_intents(
    mailer: &dyn Mailer,
    from: &str,
    intents: Vec<ResetIntent>,
) -> Result<(), MailerError> {
    for intent in intents {
        match intent {
            ResetIntent::SendPasswordResetEmail {
                to,
                token,
                expires_at,
            } => {
                let expires = DateTime::from_timestamp_millis(expires_at)
                    .map(|at| at.to_rfc3339())
                    .unwrap_or_else(|| expires_at.to_string());
                mailer
                    .send(OutgoingMail {
                        from: from.to_string(),
                        to,
                        subject: RESET_MAIL_SUBJECT.to_string(),
                        body: format!(
                            "A password reset was requested for your account.\n\n\
                             Reset token: {token}\n\n\
                             The token expires at {expires}. If you did not ask for a reset, ignore this message."
                        ),
                    })
                    .await?;
            }
        }
    }
    Ok(())
}
