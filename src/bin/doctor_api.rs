//! Token Doctor API Server
//!
//! Usage:
//!   cargo run --bin doctor_api
//!
//! Environment:
//!   PORT / DOCTOR_PORT - Server port (default: 8080)
//!   DOCTOR_HOST        - Server host (default: 0.0.0.0)
//!   RUST_LOG           - Log level (default: info)
//!   RPC_URL, DOCTOR_ADDRESS, WETH_ADDRESS, UNISWAP_V3_ROUTER,
//!   UNISWAP_V2_ROUTER, SENDER, SIMULATE_AMOUNT_ETH, RPC_TIMEOUT_SECS,
//!   DOCTOR_ARTIFACT_PATH - simulation settings

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use token_doctor::api::{create_router, AppState};
use token_doctor::utils::constants::{APP_NAME, APP_VERSION, DEFAULT_API_HOST, DEFAULT_API_PORT};
use token_doctor::TokenSimulator;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // One simulator (and one HTTP client) for the whole process
    let simulator = Arc::new(TokenSimulator::from_env());
    let state = Arc::new(AppState::new(simulator));
    let app = create_router(state);

    let host = std::env::var("DOCTOR_HOST").unwrap_or_else(|_| DEFAULT_API_HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .or_else(|_| std::env::var("DOCTOR_PORT"))
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_API_PORT);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("🩺 {} API v{} starting on http://{}", APP_NAME, APP_VERSION, addr);
    info!("Endpoints:");
    info!("  POST /simulation          - Simulate buy/sell round trip");
    info!("  GET  /simulation/check    - Same, via query (?token=..&v3=true)");
    info!("  GET  /health              - Health check");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("👋 {} API shutdown complete", APP_NAME);

    Ok(())
}
