use dashboard_core::{BalanceHistory, Order, PageInfo, Trade, TradeHistoryFilters};

use super::{DomainStore, FetchStatus};

/// Orders, trades and balance history for the history page.
///
/// Filters are sent to the server with every load; this store only keeps the
/// current filter set and the page metadata of the last response.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    orders: Vec<Order>,
    trades: Vec<Trade>,
    balance_history: Vec<BalanceHistory>,
    filters: TradeHistoryFilters,
    orders_page: Option<PageInfo>,
    trades_page: Option<PageInfo>,
    status: FetchStatus,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn balance_history(&self) -> &[BalanceHistory] {
        &self.balance_history
    }

    pub fn filters(&self) -> &TradeHistoryFilters {
        &self.filters
    }

    pub fn orders_page(&self) -> Option<&PageInfo> {
        self.orders_page.as_ref()
    }

    pub fn trades_page(&self) -> Option<&PageInfo> {
        self.trades_page.as_ref()
    }

    pub fn set_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    pub fn set_trades(&mut self, trades: Vec<Trade>) {
        self.trades = trades;
    }

    pub fn set_balance_history(&mut self, points: Vec<BalanceHistory>) {
        self.balance_history = points;
    }

    pub fn set_orders_page(&mut self, page: Option<PageInfo>) {
        self.orders_page = page;
    }

    pub fn set_trades_page(&mut self, page: Option<PageInfo>) {
        self.trades_page = page;
    }

    /// Merge, not replace: fields absent from `partial` keep their value.
    pub fn set_filters(&mut self, partial: TradeHistoryFilters) {
        self.filters.merge(partial);
    }

    pub fn clear_filters(&mut self) {
        self.filters = TradeHistoryFilters::default();
    }
}

impl DomainStore for HistoryStore {
    const NAME: &'static str = "history";

    fn status(&self) -> &FetchStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut FetchStatus {
        &mut self.status
    }
}
