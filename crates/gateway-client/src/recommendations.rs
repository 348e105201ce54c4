use dashboard_core::{AIRecommendation, GatewayResult, RejectRecommendationRequest};
use reqwest::Method;

use crate::client::{GatewayClient, RequestOptions};

impl GatewayClient {
    /// Ask the AI agent for a fresh recommendation on current market state
    pub async fn get_latest_recommendation(&self) -> GatewayResult<AIRecommendation> {
        self.fetch_data(
            "/recommendations/latest",
            RequestOptions::get(),
            "Failed to fetch recommendation",
        )
        .await
    }

    pub async fn get_recommendation_history(&self) -> GatewayResult<Vec<AIRecommendation>> {
        self.fetch_data(
            "/recommendations/history",
            RequestOptions::get(),
            "Failed to fetch recommendation history",
        )
        .await
    }

    pub async fn approve_recommendation(&self, id: &str) -> GatewayResult<()> {
        tracing::info!("Approving recommendation {}", id);
        self.fetch_unit(
            &format!("/recommendations/{}/approve", id),
            RequestOptions::method(Method::POST),
            "Failed to approve recommendation",
        )
        .await
    }

    pub async fn reject_recommendation(&self, id: &str, reason: Option<&str>) -> GatewayResult<()> {
        tracing::info!("Rejecting recommendation {} ({:?})", id, reason);
        let body = RejectRecommendationRequest {
            reason: reason.map(str::to_string),
        };
        let options = RequestOptions::method(Method::POST).with_json(&body)?;
        self.fetch_unit(
            &format!("/recommendations/{}/reject", id),
            options,
            "Failed to reject recommendation",
        )
        .await
    }
}
