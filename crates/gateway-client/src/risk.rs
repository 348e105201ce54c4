use dashboard_core::{GatewayResult, NewRiskConfig, RiskConfig, RiskConfigPatch};
use reqwest::Method;

use crate::client::{GatewayClient, RequestOptions};

impl GatewayClient {
    pub async fn get_risk_configs(&self) -> GatewayResult<Vec<RiskConfig>> {
        self.fetch_data(
            "/risk/config",
            RequestOptions::get(),
            "Failed to fetch risk configurations",
        )
        .await
    }

    pub async fn get_risk_config(&self, id: &str) -> GatewayResult<RiskConfig> {
        self.fetch_data(
            &format!("/risk/config/{}", id),
            RequestOptions::get(),
            "Failed to fetch risk configuration",
        )
        .await
    }

    pub async fn create_risk_config(&self, config: &NewRiskConfig) -> GatewayResult<RiskConfig> {
        let options = RequestOptions::method(Method::POST).with_json(config)?;
        self.fetch_data("/risk/config", options, "Failed to create risk configuration")
            .await
    }

    pub async fn update_risk_config(
        &self,
        id: &str,
        patch: &RiskConfigPatch,
    ) -> GatewayResult<RiskConfig> {
        let options = RequestOptions::method(Method::PATCH).with_json(patch)?;
        self.fetch_data(
            &format!("/risk/config/{}", id),
            options,
            "Failed to update risk configuration",
        )
        .await
    }

    pub async fn delete_risk_config(&self, id: &str) -> GatewayResult<()> {
        self.fetch_unit(
            &format!("/risk/config/{}", id),
            RequestOptions::method(Method::DELETE),
            "Failed to delete risk configuration",
        )
        .await
    }
}
