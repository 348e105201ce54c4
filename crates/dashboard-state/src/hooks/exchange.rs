use dashboard_core::MarketPairPatch;

use super::{run_fetch, FetchOutcome};
use crate::context::AppContext;
use crate::scope::{ScopeToken, ViewScope};

/// Exchange page: account, market pairs and portfolio stats.
pub struct ExchangeData {
    ctx: AppContext,
    token: ScopeToken,
}

impl ExchangeData {
    pub fn new(ctx: &AppContext, scope: &ViewScope) -> Self {
        Self {
            ctx: ctx.clone(),
            token: scope.token(),
        }
    }

    pub async fn load(&self) -> FetchOutcome {
        load_exchange(&self.ctx, &self.token).await
    }

    /// Re-read one pair and patch it in place.
    pub async fn refresh_pair(&self, symbol: &str) -> FetchOutcome {
        run_fetch(
            &self.token,
            &self.ctx.exchange,
            "refresh market pair",
            self.ctx.api.get_market_pair(symbol),
            |store, pair| {
                if !store.update_market_pair(symbol, &MarketPairPatch::from(&pair)) {
                    tracing::debug!("market pair {} not listed, ignoring refresh", symbol);
                }
            },
        )
        .await
    }
}

/// The three exchange reads succeed or fail together.
pub(crate) async fn load_exchange(ctx: &AppContext, token: &ScopeToken) -> FetchOutcome {
    let api = &ctx.api;
    run_fetch(
        token,
        &ctx.exchange,
        "fetch exchange data",
        async {
            tokio::try_join!(
                api.get_balance(),
                api.get_market_pairs(),
                api.get_portfolio_stats()
            )
        },
        |store, (account, pairs, stats)| {
            store.set_account(Some(account));
            store.set_market_pairs(pairs);
            store.set_portfolio_stats(Some(stats));
        },
    )
    .await
}
