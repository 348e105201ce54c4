use dashboard_core::{Order, PageRequest, PaginatedResponse, Trade, TradeHistoryFilters};

use super::{finish_fetch, run_fetch, FetchOutcome};
use crate::context::AppContext;
use crate::scope::{ScopeToken, ViewScope};
use crate::stores::{DomainStore, HistoryStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLoad {
    pub orders: FetchOutcome,
    pub trades: FetchOutcome,
    pub balance_history: FetchOutcome,
}

impl HistoryLoad {
    fn cancelled() -> Self {
        Self {
            orders: FetchOutcome::Cancelled,
            trades: FetchOutcome::Cancelled,
            balance_history: FetchOutcome::Cancelled,
        }
    }
}

/// Whether a listing fetch still has to raise loading on the store.
#[derive(Debug, Clone, Copy)]
enum Loading {
    Raise,
    Raised,
}

/// History page.
///
/// Filtering happens on the server: every filter change merges into the
/// store, resets paging and reloads all three listings with the new filters.
pub struct HistoryData {
    ctx: AppContext,
    token: ScopeToken,
    orders_page: PageRequest,
    trades_page: PageRequest,
}

impl HistoryData {
    pub fn new(ctx: &AppContext, scope: &ViewScope) -> Self {
        Self {
            ctx: ctx.clone(),
            token: scope.token(),
            orders_page: PageRequest::default(),
            trades_page: PageRequest::default(),
        }
    }

    pub async fn load(&self) -> HistoryLoad {
        if self.token.is_cancelled() {
            return HistoryLoad::cancelled();
        }
        // All three listings share one store status. They are raised under
        // one lock so that no listing starts after a sibling already failed.
        let filters = {
            let mut store = self.ctx.history.write().await;
            for _ in 0..3 {
                store.status_mut().begin();
            }
            store.filters().clone()
        };
        let (orders, trades, balance_history) = tokio::join!(
            self.fetch_orders(&filters, Loading::Raised),
            self.fetch_trades(&filters, Loading::Raised),
            finish_fetch(
                &self.token,
                &self.ctx.history,
                "fetch balance history",
                self.ctx.api.get_balance_history(&filters),
                |store, points| store.set_balance_history(points),
            ),
        );
        HistoryLoad {
            orders,
            trades,
            balance_history,
        }
    }

    pub async fn apply_filters(&mut self, partial: TradeHistoryFilters) -> HistoryLoad {
        self.ctx.history.write().await.set_filters(partial);
        self.reset_pages();
        self.load().await
    }

    pub async fn clear_filters(&mut self) -> HistoryLoad {
        self.ctx.history.write().await.clear_filters();
        self.reset_pages();
        self.load().await
    }

    pub async fn set_orders_page(&mut self, page: u32) -> FetchOutcome {
        self.orders_page.page = page.max(1);
        let filters = self.filters().await;
        self.fetch_orders(&filters, Loading::Raise).await
    }

    pub async fn set_trades_page(&mut self, page: u32) -> FetchOutcome {
        self.trades_page.page = page.max(1);
        let filters = self.filters().await;
        self.fetch_trades(&filters, Loading::Raise).await
    }

    fn reset_pages(&mut self) {
        self.orders_page.page = 1;
        self.trades_page.page = 1;
    }

    async fn filters(&self) -> TradeHistoryFilters {
        self.ctx.history.read().await.filters().clone()
    }

    async fn fetch_orders(&self, filters: &TradeHistoryFilters, loading: Loading) -> FetchOutcome {
        let request = self.ctx.api.get_orders(filters, self.orders_page);
        let apply = |store: &mut HistoryStore, page: PaginatedResponse<Order>| {
            store.set_orders_page(Some(page.page_info()));
            store.set_orders(page.data);
        };
        match loading {
            Loading::Raise => {
                run_fetch(&self.token, &self.ctx.history, "fetch orders", request, apply).await
            }
            Loading::Raised => {
                finish_fetch(&self.token, &self.ctx.history, "fetch orders", request, apply).await
            }
        }
    }

    async fn fetch_trades(&self, filters: &TradeHistoryFilters, loading: Loading) -> FetchOutcome {
        let request = self.ctx.api.get_trades(filters, self.trades_page);
        let apply = |store: &mut HistoryStore, page: PaginatedResponse<Trade>| {
            store.set_trades_page(Some(page.page_info()));
            store.set_trades(page.data);
        };
        match loading {
            Loading::Raise => {
                run_fetch(&self.token, &self.ctx.history, "fetch trades", request, apply).await
            }
            Loading::Raised => {
                finish_fetch(&self.token, &self.ctx.history, "fetch trades", request, apply).await
            }
        }
    }
}
