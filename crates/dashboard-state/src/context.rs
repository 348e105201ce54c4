use std::sync::Arc;

use dashboard_core::DashboardApi;

use crate::selectors::{store_error, StoreError};
use crate::stores::{
    handle, ExchangeStore, GoalStore, HistoryStore, RecommendationStore, RiskStore, SignalStore,
    StoreHandle, UserStore,
};

/// Per-application container: the API plus one handle per domain store.
///
/// Cloning is cheap and every clone sees the same stores.
#[derive(Clone)]
pub struct AppContext {
    pub api: Arc<dyn DashboardApi>,
    pub signals: StoreHandle<SignalStore>,
    pub goals: StoreHandle<GoalStore>,
    pub exchange: StoreHandle<ExchangeStore>,
    pub history: StoreHandle<HistoryStore>,
    pub risk: StoreHandle<RiskStore>,
    pub recommendations: StoreHandle<RecommendationStore>,
    pub user: StoreHandle<UserStore>,
}

impl AppContext {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self {
            api,
            signals: handle(SignalStore::new()),
            goals: handle(GoalStore::new()),
            exchange: handle(ExchangeStore::new()),
            history: handle(HistoryStore::new()),
            risk: handle(RiskStore::new()),
            recommendations: handle(RecommendationStore::new()),
            user: handle(UserStore::new()),
        }
    }

    /// Current error of every store that has one, for display.
    pub async fn error_summary(&self) -> Vec<StoreError> {
        let (signals, goals, exchange, history, risk, recommendations, user) = tokio::join!(
            self.signals.read(),
            self.goals.read(),
            self.exchange.read(),
            self.history.read(),
            self.risk.read(),
            self.recommendations.read(),
            self.user.read(),
        );

        [
            store_error(&*signals),
            store_error(&*goals),
            store_error(&*exchange),
            store_error(&*history),
            store_error(&*risk),
            store_error(&*recommendations),
            store_error(&*user),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
