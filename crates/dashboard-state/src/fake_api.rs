//! In-memory `DashboardApi` for exercising the hooks without a server.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Duration;
use dashboard_core::*;
use tokio::sync::Notify;

use crate::fixtures;

#[derive(Default)]
pub struct FakeState {
    pub signals: Vec<Signal>,
    pub goals: Vec<Goal>,
    pub account: Option<ExchangeAccount>,
    pub market_pairs: Vec<MarketPair>,
    pub portfolio_stats: Option<PortfolioStats>,
    pub orders: Vec<Order>,
    pub trades: Vec<Trade>,
    pub balance_history: Vec<BalanceHistory>,
    pub risk_configs: Vec<RiskConfig>,
    pub user: Option<UserProfile>,
    pub latest_recommendation: Option<AIRecommendation>,
    pub recommendation_history: Vec<AIRecommendation>,
    pub order_requests: Vec<(TradeHistoryFilters, PageRequest)>,
    failures: HashMap<&'static str, GatewayError>,
    gates: HashMap<&'static str, Arc<Notify>>,
    calls: Vec<(&'static str, String)>,
    next_id: u32,
}

#[derive(Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
}

pub fn not_found() -> GatewayError {
    GatewayError::Http {
        status: 404,
        status_text: "Not Found".to_string(),
        message: "not found".to_string(),
    }
}

impl FakeApi {
    /// Server seeded with one of everything.
    pub fn seeded() -> Arc<Self> {
        let api = Self::default();
        {
            let mut state = api.state();
            state.signals = vec![
                fixtures::signal("sig-1", "BTC", TimeHorizon::OneWeek),
                fixtures::signal("sig-2", "ETH", TimeHorizon::OneWeek),
                fixtures::signal("sig-3", "BTC", TimeHorizon::OneDay),
            ];
            state.goals = vec![fixtures::goal("goal-1"), fixtures::goal("goal-2")];
            state.account = Some(fixtures::account());
            state.market_pairs = vec![
                fixtures::market_pair("BTC/USDT", 64_000.0),
                fixtures::market_pair("ETH/USDT", 3_100.0),
            ];
            state.portfolio_stats = Some(fixtures::portfolio_stats());
            state.orders = vec![
                fixtures::order("o-1", "BTC", OrderStatus::Filled),
                fixtures::order("o-2", "ETH", OrderStatus::Filled),
                fixtures::order("o-3", "BTC", OrderStatus::Cancelled),
            ];
            state.trades = vec![
                fixtures::trade("t-1", "BTC", OrderSide::Buy),
                fixtures::trade("t-2", "ETH", OrderSide::Sell),
            ];
            state.balance_history = fixtures::balance_history(7);
            state.risk_configs = vec![
                fixtures::risk_config("risk-a"),
                fixtures::risk_config("risk-b"),
            ];
            state.user = Some(fixtures::user());
            state.latest_recommendation = Some(fixtures::recommendation("rec-latest"));
            state.recommendation_history = vec![
                fixtures::recommendation("rec-2"),
                fixtures::recommendation("rec-1"),
            ];
        }
        Arc::new(api)
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn fail(&self, endpoint: &'static str, err: GatewayError) {
        self.state().failures.insert(endpoint, err);
    }

    pub fn recover(&self, endpoint: &'static str) {
        self.state().failures.remove(endpoint);
    }

    /// Requests to `endpoint` wait until the returned gate is notified.
    pub fn hold(&self, endpoint: &'static str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.state().gates.insert(endpoint, gate.clone());
        gate
    }

    pub fn calls(&self, endpoint: &str) -> usize {
        self.state().calls.iter().filter(|(e, _)| *e == endpoint).count()
    }

    pub fn last_call(&self, endpoint: &str) -> Option<String> {
        self.state()
            .calls
            .iter()
            .rev()
            .find(|(e, _)| *e == endpoint)
            .map(|(_, detail)| detail.clone())
    }

    async fn enter(&self, endpoint: &'static str, detail: String) -> GatewayResult<()> {
        let gate = {
            let mut state = self.state();
            state.calls.push((endpoint, detail));
            state.gates.get(endpoint).cloned()
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }
        match self.state().failures.get(endpoint) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn next_id(&self, prefix: &str) -> String {
        let mut state = self.state();
        state.next_id += 1;
        format!("{}-new-{}", prefix, state.next_id)
    }
}

fn matches_filters(
    filters: &TradeHistoryFilters,
    asset: &str,
    side: OrderSide,
    status: Option<OrderStatus>,
) -> bool {
    filters.asset.as_deref().map_or(true, |a| a == asset)
        && filters.side.map_or(true, |s| s == side)
        && match (filters.status, status) {
            (Some(wanted), Some(actual)) => wanted == actual,
            _ => true,
        }
}

fn paginate<T: Clone>(items: Vec<T>, page: PageRequest) -> PaginatedResponse<T> {
    let total = items.len() as u64;
    let size = page.page_size.max(1) as usize;
    let start = (page.page.max(1) as usize - 1) * size;
    PaginatedResponse {
        data: items.into_iter().skip(start).take(size).collect(),
        page: page.page,
        page_size: page.page_size,
        total,
        total_pages: total.div_ceil(size as u64) as u32,
    }
}

#[async_trait]
impl DashboardApi for FakeApi {
    async fn get_signals(&self, horizon: Option<TimeHorizon>) -> GatewayResult<Vec<Signal>> {
        let detail = horizon.map(|h| h.to_string()).unwrap_or_default();
        self.enter("get_signals", detail).await?;
        Ok(self
            .state()
            .signals
            .iter()
            .filter(|s| horizon.map_or(true, |h| s.horizon == h))
            .cloned()
            .collect())
    }

    async fn get_signal_by_asset(
        &self,
        asset: &str,
        horizon: Option<TimeHorizon>,
    ) -> GatewayResult<Signal> {
        self.enter("get_signal_by_asset", asset.to_string()).await?;
        self.state()
            .signals
            .iter()
            .find(|s| s.asset == asset && horizon.map_or(true, |h| s.horizon == h))
            .cloned()
            .ok_or_else(not_found)
    }

    async fn get_goals(&self) -> GatewayResult<Vec<Goal>> {
        self.enter("get_goals", String::new()).await?;
        Ok(self.state().goals.clone())
    }

    async fn get_goal(&self, id: &str) -> GatewayResult<Goal> {
        self.enter("get_goal", id.to_string()).await?;
        self.state()
            .goals
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create_goal(&self, request: &CreateGoalRequest) -> GatewayResult<Goal> {
        self.enter("create_goal", String::new()).await?;
        let goal = Goal {
            capital_usd: request.capital_usd,
            target_return_pct: request.target_return_pct,
            horizon_days: request.horizon_days,
            risk_profile: request.risk_profile,
            current_return_pct: 0.0,
            ..fixtures::goal(&self.next_id("goal"))
        };
        self.state().goals.push(goal.clone());
        Ok(goal)
    }

    async fn update_goal(&self, id: &str, patch: &GoalPatch) -> GatewayResult<Goal> {
        self.enter("update_goal", id.to_string()).await?;
        let mut state = self.state();
        let goal = state.goals.iter_mut().find(|g| g.id == id).ok_or_else(not_found)?;
        patch.apply(goal);
        Ok(goal.clone())
    }

    async fn execute_goal(&self, id: &str, dry_run: bool) -> GatewayResult<Goal> {
        self.enter("execute_goal", format!("{} dry_run={}", id, dry_run))
            .await?;
        let mut state = self.state();
        let goal = state.goals.iter_mut().find(|g| g.id == id).ok_or_else(not_found)?;
        if dry_run {
            let mut preview = goal.clone();
            preview.explain = vec!["Dry run: 2 orders would be placed".to_string()];
            return Ok(preview);
        }
        goal.status = GoalStatus::Active;
        goal.updated_at = fixtures::at() + Duration::hours(1);
        Ok(goal.clone())
    }

    async fn pause_goal(&self, id: &str) -> GatewayResult<Goal> {
        self.enter("pause_goal", id.to_string()).await?;
        let mut state = self.state();
        let goal = state.goals.iter_mut().find(|g| g.id == id).ok_or_else(not_found)?;
        goal.status = GoalStatus::Paused;
        Ok(goal.clone())
    }

    async fn delete_goal(&self, id: &str) -> GatewayResult<()> {
        self.enter("delete_goal", id.to_string()).await?;
        let mut state = self.state();
        let before = state.goals.len();
        state.goals.retain(|g| g.id != id);
        if state.goals.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn get_balance(&self) -> GatewayResult<ExchangeAccount> {
        self.enter("get_balance", String::new()).await?;
        self.state().account.clone().ok_or_else(not_found)
    }

    async fn get_market_pairs(&self) -> GatewayResult<Vec<MarketPair>> {
        self.enter("get_market_pairs", String::new()).await?;
        Ok(self.state().market_pairs.clone())
    }

    async fn get_market_pair(&self, symbol: &str) -> GatewayResult<MarketPair> {
        self.enter("get_market_pair", symbol.to_string()).await?;
        self.state()
            .market_pairs
            .iter()
            .find(|p| p.symbol == symbol)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn get_portfolio_stats(&self) -> GatewayResult<PortfolioStats> {
        self.enter("get_portfolio_stats", String::new()).await?;
        self.state().portfolio_stats.clone().ok_or_else(not_found)
    }

    async fn get_orders(
        &self,
        filters: &TradeHistoryFilters,
        page: PageRequest,
    ) -> GatewayResult<PaginatedResponse<Order>> {
        self.enter("get_orders", String::new()).await?;
        let mut state = self.state();
        state.order_requests.push((filters.clone(), page));
        let orders = state
            .orders
            .iter()
            .filter(|o| matches_filters(filters, &o.asset, o.side, Some(o.status)))
            .cloned()
            .collect();
        Ok(paginate(orders, page))
    }

    async fn get_order(&self, id: &str) -> GatewayResult<Order> {
        self.enter("get_order", id.to_string()).await?;
        self.state()
            .orders
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn get_trades(
        &self,
        filters: &TradeHistoryFilters,
        page: PageRequest,
    ) -> GatewayResult<PaginatedResponse<Trade>> {
        self.enter("get_trades", String::new()).await?;
        let trades = self
            .state()
            .trades
            .iter()
            .filter(|t| matches_filters(filters, &t.asset, t.side, None))
            .cloned()
            .collect();
        Ok(paginate(trades, page))
    }

    async fn get_balance_history(
        &self,
        _filters: &TradeHistoryFilters,
    ) -> GatewayResult<Vec<BalanceHistory>> {
        self.enter("get_balance_history", String::new()).await?;
        Ok(self.state().balance_history.clone())
    }

    async fn get_risk_configs(&self) -> GatewayResult<Vec<RiskConfig>> {
        self.enter("get_risk_configs", String::new()).await?;
        Ok(self.state().risk_configs.clone())
    }

    async fn get_risk_config(&self, id: &str) -> GatewayResult<RiskConfig> {
        self.enter("get_risk_config", id.to_string()).await?;
        self.state()
            .risk_configs
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create_risk_config(&self, config: &NewRiskConfig) -> GatewayResult<RiskConfig> {
        self.enter("create_risk_config", config.name.clone()).await?;
        let created = RiskConfig {
            name: config.name.clone(),
            per_asset_cap: config.per_asset_cap,
            sector_cap: config.sector_cap,
            max_daily_var: config.max_daily_var,
            max_drawdown: config.max_drawdown,
            max_slippage: config.max_slippage,
            stablecoin_buffer: config.stablecoin_buffer,
            whitelist: config.whitelist.clone(),
            blacklist: config.blacklist.clone(),
            spot_only: config.spot_only,
            leverage_enabled: config.leverage_enabled,
            futures_enabled: config.futures_enabled,
            ..fixtures::risk_config(&self.next_id("risk"))
        };
        self.state().risk_configs.push(created.clone());
        Ok(created)
    }

    async fn update_risk_config(
        &self,
        id: &str,
        patch: &RiskConfigPatch,
    ) -> GatewayResult<RiskConfig> {
        self.enter("update_risk_config", id.to_string()).await?;
        let mut state = self.state();
        let config = state
            .risk_configs
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(not_found)?;
        patch.apply(config);
        Ok(config.clone())
    }

    async fn delete_risk_config(&self, id: &str) -> GatewayResult<()> {
        self.enter("delete_risk_config", id.to_string()).await?;
        let mut state = self.state();
        let before = state.risk_configs.len();
        state.risk_configs.retain(|c| c.id != id);
        if state.risk_configs.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn get_profile(&self) -> GatewayResult<UserProfile> {
        self.enter("get_profile", String::new()).await?;
        self.state().user.clone().ok_or_else(not_found)
    }

    async fn update_profile(&self, patch: &UserProfilePatch) -> GatewayResult<UserProfile> {
        self.enter("update_profile", String::new()).await?;
        let mut state = self.state();
        let user = state.user.as_mut().ok_or_else(not_found)?;
        patch.apply(user);
        Ok(user.clone())
    }

    async fn get_latest_recommendation(&self) -> GatewayResult<AIRecommendation> {
        self.enter("get_latest_recommendation", String::new()).await?;
        self.state()
            .latest_recommendation
            .clone()
            .ok_or_else(not_found)
    }

    async fn get_recommendation_history(&self) -> GatewayResult<Vec<AIRecommendation>> {
        self.enter("get_recommendation_history", String::new()).await?;
        Ok(self.state().recommendation_history.clone())
    }

    async fn approve_recommendation(&self, id: &str) -> GatewayResult<()> {
        self.enter("approve_recommendation", id.to_string()).await
    }

    async fn reject_recommendation(&self, id: &str, reason: Option<&str>) -> GatewayResult<()> {
        let detail = format!("{} reason={}", id, reason.unwrap_or("-"));
        self.enter("reject_recommendation", detail).await
    }
}
