use async_trait::async_trait;
use dashboard_core::*;

use crate::client::GatewayClient;

#[async_trait]
impl DashboardApi for GatewayClient {
    async fn get_signals(&self, horizon: Option<TimeHorizon>) -> GatewayResult<Vec<Signal>> {
        GatewayClient::get_signals(self, horizon).await
    }

    async fn get_signal_by_asset(
        &self,
        asset: &str,
        horizon: Option<TimeHorizon>,
    ) -> GatewayResult<Signal> {
        GatewayClient::get_signal_by_asset(self, asset, horizon).await
    }

    async fn get_goals(&self) -> GatewayResult<Vec<Goal>> {
        GatewayClient::get_goals(self).await
    }

    async fn get_goal(&self, id: &str) -> GatewayResult<Goal> {
        GatewayClient::get_goal(self, id).await
    }

    async fn create_goal(&self, request: &CreateGoalRequest) -> GatewayResult<Goal> {
        GatewayClient::create_goal(self, request).await
    }

    async fn update_goal(&self, id: &str, patch: &GoalPatch) -> GatewayResult<Goal> {
        GatewayClient::update_goal(self, id, patch).await
    }

    async fn execute_goal(&self, id: &str, dry_run: bool) -> GatewayResult<Goal> {
        GatewayClient::execute_goal(self, id, dry_run).await
    }

    async fn pause_goal(&self, id: &str) -> GatewayResult<Goal> {
        GatewayClient::pause_goal(self, id).await
    }

    async fn delete_goal(&self, id: &str) -> GatewayResult<()> {
        GatewayClient::delete_goal(self, id).await
    }

    async fn get_balance(&self) -> GatewayResult<ExchangeAccount> {
        GatewayClient::get_balance(self).await
    }

    async fn get_market_pairs(&self) -> GatewayResult<Vec<MarketPair>> {
        GatewayClient::get_market_pairs(self).await
    }

    async fn get_market_pair(&self, symbol: &str) -> GatewayResult<MarketPair> {
        GatewayClient::get_market_pair(self, symbol).await
    }

    async fn get_portfolio_stats(&self) -> GatewayResult<PortfolioStats> {
        GatewayClient::get_portfolio_stats(self).await
    }

    async fn get_orders(
        &self,
        filters: &TradeHistoryFilters,
        page: PageRequest,
    ) -> GatewayResult<PaginatedResponse<Order>> {
        GatewayClient::get_orders(self, filters, page).await
    }

    async fn get_order(&self, id: &str) -> GatewayResult<Order> {
        GatewayClient::get_order(self, id).await
    }

    async fn get_trades(
        &self,
        filters: &TradeHistoryFilters,
        page: PageRequest,
    ) -> GatewayResult<PaginatedResponse<Trade>> {
        GatewayClient::get_trades(self, filters, page).await
    }

    async fn get_balance_history(
        &self,
        filters: &TradeHistoryFilters,
    ) -> GatewayResult<Vec<BalanceHistory>> {
        GatewayClient::get_balance_history(self, filters).await
    }

    async fn get_risk_configs(&self) -> GatewayResult<Vec<RiskConfig>> {
        GatewayClient::get_risk_configs(self).await
    }

    async fn get_risk_config(&self, id: &str) -> GatewayResult<RiskConfig> {
        GatewayClient::get_risk_config(self, id).await
    }

    async fn create_risk_config(&self, config: &NewRiskConfig) -> GatewayResult<RiskConfig> {
        GatewayClient::create_risk_config(self, config).await
    }

    async fn update_risk_config(
        &self,
        id: &str,
        patch: &RiskConfigPatch,
    ) -> GatewayResult<RiskConfig> {
        GatewayClient::update_risk_config(self, id, patch).await
    }

    async fn delete_risk_config(&self, id: &str) -> GatewayResult<()> {
        GatewayClient::delete_risk_config(self, id).await
    }

    async fn get_profile(&self) -> GatewayResult<UserProfile> {
        GatewayClient::get_profile(self).await
    }

    async fn update_profile(&self, patch: &UserProfilePatch) -> GatewayResult<UserProfile> {
        GatewayClient::update_profile(self, patch).await
    }

    async fn get_latest_recommendation(&self) -> GatewayResult<AIRecommendation> {
        GatewayClient::get_latest_recommendation(self).await
    }

    async fn get_recommendation_history(&self) -> GatewayResult<Vec<AIRecommendation>> {
        GatewayClient::get_recommendation_history(self).await
    }

    async fn approve_recommendation(&self, id: &str) -> GatewayResult<()> {
        GatewayClient::approve_recommendation(self, id).await
    }

    async fn reject_recommendation(&self, id: &str, reason: Option<&str>) -> GatewayResult<()> {
        GatewayClient::reject_recommendation(self, id, reason).await
    }
}
