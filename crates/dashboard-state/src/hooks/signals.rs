use dashboard_core::TimeHorizon;

use super::{run_fetch, FetchOutcome};
use crate::context::AppContext;
use crate::scope::{ScopeToken, ViewScope};

/// Signals page. Refetches whenever the store's selected horizon differs
/// from the one last requested.
pub struct SignalFeed {
    ctx: AppContext,
    token: ScopeToken,
    fetched_for: Option<TimeHorizon>,
}

impl SignalFeed {
    pub fn new(ctx: &AppContext, scope: &ViewScope) -> Self {
        Self {
            ctx: ctx.clone(),
            token: scope.token(),
            fetched_for: None,
        }
    }

    /// Call on mount and after anything may have changed the horizon.
    pub async fn sync(&mut self) -> FetchOutcome {
        let horizon = self.ctx.signals.read().await.selected_horizon();
        if self.fetched_for == Some(horizon) {
            return FetchOutcome::Skipped;
        }
        self.fetch(horizon).await
    }

    pub async fn select_horizon(&mut self, horizon: TimeHorizon) -> FetchOutcome {
        self.ctx.signals.write().await.set_selected_horizon(horizon);
        self.sync().await
    }

    /// Explicit user refresh; always hits the API.
    pub async fn refresh(&mut self) -> FetchOutcome {
        let horizon = self.ctx.signals.read().await.selected_horizon();
        self.fetch(horizon).await
    }

    async fn fetch(&mut self, horizon: TimeHorizon) -> FetchOutcome {
        self.fetched_for = Some(horizon);
        run_fetch(
            &self.token,
            &self.ctx.signals,
            "fetch signals",
            self.ctx.api.get_signals(Some(horizon)),
            |store, signals| store.set_signals(signals),
        )
        .await
    }
}
