use std::sync::Arc;

use anyhow::{Context, Result};
use dashboard_state::AppContext;
use gateway_client::GatewayClient;
use tokio::signal::unix::SignalKind;

mod config;
mod health;
mod startup;

use config::AppConfig;
use health::{health_routes, HealthState};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load .env, init tracing
    dotenvy::dotenv().ok();

    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
        tracing::error!("PANIC: {info}");
    }));

    // 2. Configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Starting trading dashboard ({})", config.environment);
    tracing::info!("  API: {}", config.gateway.base_url);
    tracing::info!("  Timeout: {}s", config.gateway.timeout.as_secs());
    tracing::info!("  Signal horizon: {}", config.default_signal_horizon);

    // 3. Context and initial page loads
    let client = GatewayClient::new(config.gateway.clone());
    let ctx = AppContext::new(Arc::new(client));

    let failed = startup::load_initial_pages(&ctx, config.default_signal_horizon).await;
    if failed > 0 {
        tracing::warn!("{} initial fetches failed", failed);
    }
    startup::log_summary(&ctx).await;

    if !config.serve_health {
        return Ok(());
    }

    // 4. Health endpoint until SIGINT/SIGTERM
    let addr = format!("0.0.0.0:{}", config.health_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind health endpoint on {}", addr))?;
    tracing::info!("Health endpoint on http://{}/api/health", addr);

    let mut sigterm = tokio::signal::unix::signal(SignalKind::terminate())?;
    let shutdown = async move {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received SIGINT");
            }
            _ = sigterm.recv() => {
                tracing::info!("Received SIGTERM");
            }
        }
    };

    axum::serve(listener, health_routes(HealthState::new(&config.environment)))
        .with_graceful_shutdown(shutdown)
        .await
        .context("health server failed")?;

    tracing::info!("Shutdown complete");
    Ok(())
}
