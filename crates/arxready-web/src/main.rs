//! arxready web server
//!
//! Run with: cargo run -p arxready-web

use tracing::info;
use tracing_subscriber::EnvFilter;

use arxready_common::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    info!("Starting arxready web server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Evaluation service: {}", config.evaluator.base_url);

    let addr = config.bind_addr()?;
    let state = arxready_web::state::AppState::from_config(config)?;
    let app = arxready_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await?;

    info!("arxready shutting down");
    Ok(())
}

async fn wait_for_shutdown() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
