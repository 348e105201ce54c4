pub mod api;
pub mod client;
pub mod exchange;
pub mod goals;
pub mod history;
pub mod recommendations;
pub mod risk;
pub mod signals;
pub mod user;

pub use client::{GatewayClient, RequestOptions};
pub use dashboard_core::{ErrorKind, GatewayError, GatewayResult};

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Configuration for the dashboard API gateway
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("DASHBOARD_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(
                std::env::var("DASHBOARD_API_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}
