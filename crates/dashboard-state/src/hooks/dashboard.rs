use dashboard_core::TradeHistoryFilters;

use super::exchange::load_exchange;
use super::{run_fetch, FetchOutcome};
use crate::context::AppContext;
use crate::scope::{ScopeToken, ViewScope};

/// Per-store result of a dashboard load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLoad {
    pub exchange: FetchOutcome,
    pub goals: FetchOutcome,
    pub balance_history: FetchOutcome,
}

impl DashboardLoad {
    pub fn all_loaded(&self) -> bool {
        self.exchange.is_loaded() && self.goals.is_loaded() && self.balance_history.is_loaded()
    }
}

/// Dashboard page. Loads once on mount; no polling.
pub struct DashboardData {
    ctx: AppContext,
    token: ScopeToken,
}

impl DashboardData {
    pub fn new(ctx: &AppContext, scope: &ViewScope) -> Self {
        Self {
            ctx: ctx.clone(),
            token: scope.token(),
        }
    }

    /// Runs the exchange, goals and balance history fetches concurrently.
    /// A failure in one group only touches that group's store.
    pub async fn load(&self) -> DashboardLoad {
        let api = &self.ctx.api;
        let unfiltered = TradeHistoryFilters::default();

        let (exchange, goals, balance_history) = tokio::join!(
            load_exchange(&self.ctx, &self.token),
            run_fetch(
                &self.token,
                &self.ctx.goals,
                "fetch goals",
                api.get_goals(),
                |store, goals| store.set_goals(goals),
            ),
            run_fetch(
                &self.token,
                &self.ctx.history,
                "fetch balance history",
                api.get_balance_history(&unfiltered),
                |store, points| store.set_balance_history(points),
            ),
        );

        DashboardLoad {
            exchange,
            goals,
            balance_history,
        }
    }
}
