use dashboard_core::{CreateGoalRequest, ExecuteGoalRequest, Goal, GatewayResult, GoalPatch};
use reqwest::Method;

use crate::client::{GatewayClient, RequestOptions};

impl GatewayClient {
    pub async fn get_goals(&self) -> GatewayResult<Vec<Goal>> {
        self.fetch_data("/goals", RequestOptions::get(), "Failed to fetch goals")
            .await
    }

    pub async fn get_goal(&self, id: &str) -> GatewayResult<Goal> {
        self.fetch_data(
            &format!("/goals/{}", id),
            RequestOptions::get(),
            "Failed to fetch goal",
        )
        .await
    }

    pub async fn create_goal(&self, request: &CreateGoalRequest) -> GatewayResult<Goal> {
        let options = RequestOptions::method(Method::POST).with_json(request)?;
        self.fetch_data("/goals", options, "Failed to create goal").await
    }

    pub async fn update_goal(&self, id: &str, patch: &GoalPatch) -> GatewayResult<Goal> {
        let options = RequestOptions::method(Method::PATCH).with_json(patch)?;
        self.fetch_data(&format!("/goals/{}", id), options, "Failed to update goal")
            .await
    }

    /// Execute a goal plan. `dry_run` asks the server to validate without trading.
    pub async fn execute_goal(&self, id: &str, dry_run: bool) -> GatewayResult<Goal> {
        let body = ExecuteGoalRequest {
            dry_run,
            confirm_changes: true,
        };
        let options = RequestOptions::method(Method::POST).with_json(&body)?;
        tracing::info!("Executing goal {} (dry_run={})", id, dry_run);
        self.fetch_data(
            &format!("/goals/{}/execute", id),
            options,
            "Failed to execute goal",
        )
        .await
    }

    pub async fn pause_goal(&self, id: &str) -> GatewayResult<Goal> {
        self.fetch_data(
            &format!("/goals/{}/pause", id),
            RequestOptions::method(Method::POST),
            "Failed to pause goal",
        )
        .await
    }

    pub async fn delete_goal(&self, id: &str) -> GatewayResult<()> {
        self.fetch_unit(
            &format!("/goals/{}", id),
            RequestOptions::method(Method::DELETE),
            "Failed to delete goal",
        )
        .await
    }
}
