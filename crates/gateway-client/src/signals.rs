use dashboard_core::{GatewayResult, Signal, TimeHorizon};

use crate::client::{GatewayClient, RequestOptions};

fn horizon_query(horizon: Option<TimeHorizon>) -> RequestOptions {
    match horizon {
        Some(h) => RequestOptions::get().with_query("horizon", h.as_str()),
        None => RequestOptions::get(),
    }
}

impl GatewayClient {
    /// Get all signals, optionally limited to one horizon
    pub async fn get_signals(&self, horizon: Option<TimeHorizon>) -> GatewayResult<Vec<Signal>> {
        self.fetch_data("/signals", horizon_query(horizon), "Failed to fetch signals")
            .await
    }

    /// Get the signal for a specific asset
    pub async fn get_signal_by_asset(
        &self,
        asset: &str,
        horizon: Option<TimeHorizon>,
    ) -> GatewayResult<Signal> {
        self.fetch_data(
            &format!("/signals/{}", asset),
            horizon_query(horizon),
            "Failed to fetch signal",
        )
        .await
    }
}
