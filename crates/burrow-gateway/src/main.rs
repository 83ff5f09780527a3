use anyhow::Context;
use burrow_gateway::{telemetry, App, AppState, Cli, StorageBackend};
use burrow_generator::RandomGenerator;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse();
    telemetry::init(config.log_format);

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        hash_length = config.hash_length,
        "starting burrow"
    );

    let storage = StorageBackend::from_cli(&config).context("failed to set up storage")?;
    let generator = RandomGenerator::builder()
        .length(config.hash_length)
        .build();
    let state = AppState::new(storage.shortener(generator), config.public_base_url);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shutting down");
    storage.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
