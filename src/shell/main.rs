use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt};

use k12_platform::shared::infrastructure::mailer::log_mailer::LogMailer;
use k12_platform::shared::infrastructure::postgres;
use k12_platform::shell::bootstrap::seed_admin;
use k12_platform::shell::config::AppConfig;
use k12_platform::shell::http::router;
use k12_platform::shell::state::{AppState, ReadModels, Stores};
use k12_platform::shell::workers::spawn_token_purge;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;

    let stores = match config.database_url.as_deref() {
        Some(url) => {
            let pool = postgres::connect(url, config.database_max_connections).await?;
            tracing::info!("using postgres event stores");
            Stores::postgres(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; state is kept in memory only");
            Stores::in_memory()
        }
    };

    let read_models = ReadModels::new();
    read_models.rebuild(&stores).await?;

    let purge_every = Duration::from_secs(config.token_purge_interval_secs);
    let bootstrap_admin = config.bootstrap_admin.clone();
    let address = config.bind_address();
    let state = AppState::new(config, &stores, &read_models, Arc::new(LogMailer::new()));

    if let Some(admin) = bootstrap_admin {
        seed_admin(&state, &admin).await?;
    }

    let purge = spawn_token_purge(state.purge_expired_tokens.clone(), purge_every);

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("listening on http://{address} (GraphQL at /gql)");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    purge.abort();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
