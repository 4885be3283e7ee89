//! Binary entry point: tracing, config, storage, verifier, serve.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use candor_api::state::{AppConfig, AppState};
use candor_api::{app, db};
use candor_zkp::UltraHonkVerifier;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let db_pool = db::init_pool().await?;
    let verifier = Arc::new(UltraHonkVerifier::new(&config.bb_bin, &config.vk_dir));

    let port = config.port;
    let state = AppState::new(config, db_pool, verifier);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(%port, "candor-api listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}
