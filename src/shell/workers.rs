use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::modules::password_reset::use_cases::purge_expired_tokens::handler::PurgeExpiredTokensHandler;

/// Deletes expired reset tokens on a fixed interval. The first sweep runs immediately.
pub fn spawn_token_purge(
    handler: Arc<PurgeExpiredTokensHandler>,
    every: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            purge_once(&handler).await;
        }
    })
}

async fn purge_once(handler: &PurgeExpiredTokensHandler) {
    match handler.handle(Utc::now().timestamp_millis()).await {
        Ok(0) => tracing::debug!("no expired reset tokens"),
        Ok(purged) => tracing::info!(purged, "expired reset tokens purged"),
        Err(error) => tracing::warn!(%error, "reset token purge failed"),
    }
}
