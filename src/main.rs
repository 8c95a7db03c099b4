use anyhow::Context;
use axum::serve;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use deepfake_scan::{Config, app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .init();

    let config = Config::from_env()?;
    let address = config.bind_address();

    //declare the listener
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    tracing::info!("🚀 Server listening on {}", listener.local_addr()?);

    serve(listener, app()).await.context("server error")?;

    Ok(())
}
