use anyhow::{bail, Context, Result};
use dashboard_core::TimeHorizon;
use gateway_client::{GatewayConfig, DEFAULT_BASE_URL};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gateway: GatewayConfig,
    pub health_port: u16,
    pub environment: String,
    pub serve_health: bool,
    pub default_signal_horizon: TimeHorizon,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Missing keys take their defaults.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = var("DASHBOARD_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            bail!(
                "DASHBOARD_API_BASE_URL must be an http(s) URL, got '{}'",
                base_url
            );
        }

        let timeout_secs: u64 = var("DASHBOARD_API_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .context("DASHBOARD_API_TIMEOUT_SECS must be a whole number of seconds")?;
        if timeout_secs == 0 {
            bail!("DASHBOARD_API_TIMEOUT_SECS must be greater than 0");
        }

        let health_port: u16 = var("HEALTH_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("HEALTH_PORT must be a valid port number")?;

        let serve_health = match var("SERVE_HEALTH") {
            Some(v) => parse_flag(&v)
                .with_context(|| format!("SERVE_HEALTH must be true or false, got '{}'", v))?,
            None => true,
        };

        let default_signal_horizon = var("DEFAULT_SIGNAL_HORIZON")
            .unwrap_or_else(|| TimeHorizon::default().to_string())
            .parse::<TimeHorizon>()
            .map_err(anyhow::Error::msg)
            .context("DEFAULT_SIGNAL_HORIZON must be one of 1D, 1W, 1M")?;

        Ok(Self {
            gateway: GatewayConfig {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
            health_port,
            environment: var("APP_ENV").unwrap_or_else(|| "development".to_string()),
            serve_health,
            default_signal_horizon,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
