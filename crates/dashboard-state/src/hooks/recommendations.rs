use std::future::Future;

use chrono::Utc;
use dashboard_core::{GatewayResult, RecommendationStatus};

use super::{run_fetch, FetchOutcome};
use crate::context::AppContext;
use crate::scope::{ScopeToken, ViewScope};
use crate::stores::DomainStore;

/// Recommendations page.
///
/// Approve and reject update the store first and then tell the server. A
/// failed server call is logged and shown through the store error; the
/// local status is kept. The next successful call clears that error.
pub struct RecommendationFeed {
    ctx: AppContext,
    token: ScopeToken,
}

impl RecommendationFeed {
    pub fn new(ctx: &AppContext, scope: &ViewScope) -> Self {
        Self {
            ctx: ctx.clone(),
            token: scope.token(),
        }
    }

    /// Ask for a fresh recommendation and put it at the top.
    pub async fn refresh(&self) -> FetchOutcome {
        run_fetch(
            &self.token,
            &self.ctx.recommendations,
            "fetch latest recommendation",
            self.ctx.api.get_latest_recommendation(),
            |store, rec| {
                store.add_recommendation(rec);
                store.set_last_fetched(Utc::now());
            },
        )
        .await
    }

    pub async fn load_history(&self) -> FetchOutcome {
        run_fetch(
            &self.token,
            &self.ctx.recommendations,
            "fetch recommendation history",
            self.ctx.api.get_recommendation_history(),
            |store, recs| store.set_recommendations(recs),
        )
        .await
    }

    pub async fn approve(&self, id: &str) -> FetchOutcome {
        if !self.transition(id, RecommendationStatus::Approved).await {
            return FetchOutcome::Skipped;
        }
        self.notify("approve recommendation", self.ctx.api.approve_recommendation(id))
            .await
    }

    pub async fn reject(&self, id: &str, reason: Option<&str>) -> FetchOutcome {
        if !self.transition(id, RecommendationStatus::Rejected).await {
            return FetchOutcome::Skipped;
        }
        self.notify(
            "reject recommendation",
            self.ctx.api.reject_recommendation(id, reason),
        )
        .await
    }

    /// Local only; execution is reported by the trading side.
    pub async fn mark_executed(&self, id: &str) -> bool {
        self.transition(id, RecommendationStatus::Executed).await
    }

    async fn transition(&self, id: &str, next: RecommendationStatus) -> bool {
        let mut store = self.ctx.recommendations.write().await;
        let from = store.recommendation(id).map(|r| r.status);
        let applied = store.update_recommendation_status(id, next);
        if !applied {
            tracing::warn!(
                "Refusing recommendation {} transition {:?} -> {:?}",
                id,
                from,
                next
            );
        }
        applied
    }

    async fn notify<Fut>(&self, action: &str, call: Fut) -> FetchOutcome
    where
        Fut: Future<Output = GatewayResult<()>>,
    {
        let result = match self.token.run(call).await {
            Some(result) => result,
            None => return FetchOutcome::Cancelled,
        };
        let mut store = self.ctx.recommendations.write().await;
        if self.token.is_cancelled() {
            return FetchOutcome::Cancelled;
        }
        match result {
            Ok(()) => {
                store.clear_error();
                FetchOutcome::Loaded
            }
            Err(e) => {
                let message = e.to_string();
                tracing::error!("Failed to {}: {}", action, message);
                store.set_error(Some(message.clone()));
                FetchOutcome::Failed(message)
            }
        }
    }
}
