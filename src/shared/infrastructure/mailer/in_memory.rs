use crate::shared::infrastructure::mailer::{Mailer, MailerError, OutgoingMail};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryMailer {
    sent: Mutex<Vec<OutgoingMail>>,
    is_offline: AtomicBool,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub async fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl Mailer for InMemoryMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailerError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(MailerError::Unavailable("Mailer offline".into()));
        }
        self.sent.lock().await.push(mail);
        Ok(())
    }
}
