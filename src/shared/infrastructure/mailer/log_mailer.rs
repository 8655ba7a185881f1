use crate::shared::infrastructure::mailer::{Mailer, MailerError, OutgoingMail};

/// Writes outgoing mail to the trace log instead of delivering it.
#[derive(Default)]
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Mailer for LogMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailerError> {
        tracing::info!(
            from = %mail.from,
            to = %mail.to,
            subject = %mail.subject,
            "mail dispatched"
        );
        tracing::debug!(body = %mail.body, "mail body");
        Ok(())
    }
}
