use dashboard_core::{ExchangeAccount, GatewayResult, MarketPair, PortfolioStats};

use crate::client::{GatewayClient, RequestOptions};

impl GatewayClient {
    /// Get exchange account and balances
    pub async fn get_balance(&self) -> GatewayResult<ExchangeAccount> {
        self.fetch_data("/exchange/balance", RequestOptions::get(), "Failed to fetch balance")
            .await
    }

    /// Get market pairs (BTC/USDT, ETH/USDT)
    pub async fn get_market_pairs(&self) -> GatewayResult<Vec<MarketPair>> {
        self.fetch_data(
            "/market/pairs",
            RequestOptions::get(),
            "Failed to fetch market pairs",
        )
        .await
    }

    /// Get one market pair. The symbol's slash is sent as-is ("BTC/USDT" -> /market/pairs/BTC/USDT).
    pub async fn get_market_pair(&self, symbol: &str) -> GatewayResult<MarketPair> {
        self.fetch_data(
            &format!("/market/pairs/{}", symbol),
            RequestOptions::get(),
            "Failed to fetch market pair",
        )
        .await
    }

    pub async fn get_portfolio_stats(&self) -> GatewayResult<PortfolioStats> {
        self.fetch_data(
            "/exchange/portfolio/stats",
            RequestOptions::get(),
            "Failed to fetch portfolio stats",
        )
        .await
    }
}
