use async_trait::async_trait;

use crate::envelope::{PageRequest, PaginatedResponse};
use crate::error::GatewayResult;
use crate::types::*;

/// Everything the dashboard state layer needs from the remote API.
///
/// Implementations never swallow failures: every error surfaces as a
/// [`GatewayError`](crate::GatewayError) so the hooks can route it to the
/// owning store.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    // Signals
    async fn get_signals(&self, horizon: Option<TimeHorizon>) -> GatewayResult<Vec<Signal>>;
    async fn get_signal_by_asset(
        &self,
        asset: &str,
        horizon: Option<TimeHorizon>,
    ) -> GatewayResult<Signal>;

    // Goals
    async fn get_goals(&self) -> GatewayResult<Vec<Goal>>;
    async fn get_goal(&self, id: &str) -> GatewayResult<Goal>;
    async fn create_goal(&self, request: &CreateGoalRequest) -> GatewayResult<Goal>;
    async fn update_goal(&self, id: &str, patch: &GoalPatch) -> GatewayResult<Goal>;
    async fn execute_goal(&self, id: &str, dry_run: bool) -> GatewayResult<Goal>;
    async fn pause_goal(&self, id: &str) -> GatewayResult<Goal>;
    async fn delete_goal(&self, id: &str) -> GatewayResult<()>;

    // Exchange
    async fn get_balance(&self) -> GatewayResult<ExchangeAccount>;
    async fn get_market_pairs(&self) -> GatewayResult<Vec<MarketPair>>;
    async fn get_market_pair(&self, symbol: &str) -> GatewayResult<MarketPair>;
    async fn get_portfolio_stats(&self) -> GatewayResult<PortfolioStats>;

    // History
    async fn get_orders(
        &self,
        filters: &TradeHistoryFilters,
        page: PageRequest,
    ) -> GatewayResult<PaginatedResponse<Order>>;
    async fn get_order(&self, id: &str) -> GatewayResult<Order>;
    async fn get_trades(
        &self,
        filters: &TradeHistoryFilters,
        page: PageRequest,
    ) -> GatewayResult<PaginatedResponse<Trade>>;
    async fn get_balance_history(
        &self,
        filters: &TradeHistoryFilters,
    ) -> GatewayResult<Vec<BalanceHistory>>;

    // Risk
    async fn get_risk_configs(&self) -> GatewayResult<Vec<RiskConfig>>;
    async fn get_risk_config(&self, id: &str) -> GatewayResult<RiskConfig>;
    async fn create_risk_config(&self, config: &NewRiskConfig) -> GatewayResult<RiskConfig>;
    async fn update_risk_config(
        &self,
        id: &str,
        patch: &RiskConfigPatch,
    ) -> GatewayResult<RiskConfig>;
    async fn delete_risk_config(&self, id: &str) -> GatewayResult<()>;

    // User
    async fn get_profile(&self) -> GatewayResult<UserProfile>;
    async fn update_profile(&self, patch: &UserProfilePatch) -> GatewayResult<UserProfile>;

    // Recommendations
    async fn get_latest_recommendation(&self) -> GatewayResult<AIRecommendation>;
    async fn get_recommendation_history(&self) -> GatewayResult<Vec<AIRecommendation>>;
    async fn approve_recommendation(&self, id: &str) -> GatewayResult<()>;
    async fn reject_recommendation(&self, id: &str, reason: Option<&str>) -> GatewayResult<()>;
}
