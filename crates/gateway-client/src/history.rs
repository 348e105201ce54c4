use dashboard_core::{
    BalanceHistory, GatewayResult, Order, PageRequest, PaginatedResponse, Trade,
    TradeHistoryFilters,
};

use crate::client::{GatewayClient, RequestOptions};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Query shared by the order and trade listings. Orders filter on status,
/// trades on side; the other one is never sent.
fn listing_query(filters: &TradeHistoryFilters, page: PageRequest, for_orders: bool) -> RequestOptions {
    let mut options = RequestOptions::get()
        .with_query("page", page.page.to_string())
        .with_query("pageSize", page.page_size.to_string());
    options = date_range_query(options, filters);
    if let Some(asset) = &filters.asset {
        options = options.with_query("asset", asset.as_str());
    }
    if for_orders {
        if let Some(status) = filters.status {
            options = options.with_query("status", status.as_str());
        }
    } else if let Some(side) = filters.side {
        options = options.with_query("side", side.as_str());
    }
    options
}

fn date_range_query(mut options: RequestOptions, filters: &TradeHistoryFilters) -> RequestOptions {
    if let Some(start) = filters.start_date {
        options = options.with_query("startDate", start.format(DATE_FORMAT).to_string());
    }
    if let Some(end) = filters.end_date {
        options = options.with_query("endDate", end.format(DATE_FORMAT).to_string());
    }
    options
}

impl GatewayClient {
    /// Get order history with optional filters
    pub async fn get_orders(
        &self,
        filters: &TradeHistoryFilters,
        page: PageRequest,
    ) -> GatewayResult<PaginatedResponse<Order>> {
        self.fetch_data(
            "/history/orders",
            listing_query(filters, page, true),
            "Failed to fetch orders",
        )
        .await
    }

    pub async fn get_order(&self, id: &str) -> GatewayResult<Order> {
        self.fetch_data(
            &format!("/history/orders/{}", id),
            RequestOptions::get(),
            "Failed to fetch order",
        )
        .await
    }

    /// Get trade history with optional filters
    pub async fn get_trades(
        &self,
        filters: &TradeHistoryFilters,
        page: PageRequest,
    ) -> GatewayResult<PaginatedResponse<Trade>> {
        self.fetch_data(
            "/history/trades",
            listing_query(filters, page, false),
            "Failed to fetch trades",
        )
        .await
    }

    /// Balance history only honours the date range of `filters`.
    pub async fn get_balance_history(
        &self,
        filters: &TradeHistoryFilters,
    ) -> GatewayResult<Vec<BalanceHistory>> {
        self.fetch_data(
            "/history/balance",
            date_range_query(RequestOptions::get(), filters),
            "Failed to fetch balance history",
        )
        .await
    }
}
