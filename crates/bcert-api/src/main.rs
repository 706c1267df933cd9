//! # bcert-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the Blockcerts issuer.
//! Binds `0.0.0.0` on `PORT` (default 5000).

use anyhow::Context;

use bcert_api::{AppConfig, AppState, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(LogFormat::from_env());

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Configuration invalid: {e}");
        e
    })?;
    let port = config.port;
    let shape = config.shape;
    let issuer = config.issuer.id.clone();

    let app = bcert_api::app(AppState::with_config(config));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, %shape, %issuer, "Blockcerts issuer listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize structured tracing. `RUST_LOG` overrides the `info` default.
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}
