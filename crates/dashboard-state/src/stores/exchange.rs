use dashboard_core::{ExchangeAccount, MarketPair, MarketPairPatch, PortfolioStats};

use super::{DomainStore, FetchStatus};

#[derive(Debug, Clone, Default)]
pub struct ExchangeStore {
    account: Option<ExchangeAccount>,
    market_pairs: Vec<MarketPair>,
    portfolio_stats: Option<PortfolioStats>,
    status: FetchStatus,
}

impl ExchangeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(&self) -> Option<&ExchangeAccount> {
        self.account.as_ref()
    }

    pub fn market_pairs(&self) -> &[MarketPair] {
        &self.market_pairs
    }

    pub fn market_pair(&self, symbol: &str) -> Option<&MarketPair> {
        self.market_pairs.iter().find(|p| p.symbol == symbol)
    }

    pub fn portfolio_stats(&self) -> Option<&PortfolioStats> {
        self.portfolio_stats.as_ref()
    }

    pub fn set_account(&mut self, account: Option<ExchangeAccount>) {
        self.account = account;
    }

    pub fn set_market_pairs(&mut self, pairs: Vec<MarketPair>) {
        self.market_pairs = pairs;
    }

    /// Patch one pair in place; unknown symbols are ignored.
    pub fn update_market_pair(&mut self, symbol: &str, patch: &MarketPairPatch) -> bool {
        match self.market_pairs.iter_mut().find(|p| p.symbol == symbol) {
            Some(pair) => {
                patch.apply(pair);
                true
            }
            None => false,
        }
    }

    pub fn set_portfolio_stats(&mut self, stats: Option<PortfolioStats>) {
        self.portfolio_stats = stats;
    }
}

impl DomainStore for ExchangeStore {
    const NAME: &'static str = "exchange";

    fn status(&self) -> &FetchStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut FetchStatus {
        &mut self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_update_market_pair_patches_by_symbol() {
        let mut store = ExchangeStore::new();
        store.set_market_pairs(vec![
            fixtures::market_pair("BTC/USDT", 64_000.0),
            fixtures::market_pair("ETH/USDT", 3_100.0),
        ]);

        let patch = MarketPairPatch {
            current_price: Some(65_250.0),
            change_24h: Some(1.9),
            ..Default::default()
        };
        assert!(store.update_market_pair("BTC/USDT", &patch));

        let btc = store.market_pair("BTC/USDT").unwrap();
        assert_eq!(btc.current_price, 65_250.0);
        assert_eq!(btc.change_24h, 1.9);
        assert_eq!(btc.volume_24h, fixtures::market_pair("BTC/USDT", 0.0).volume_24h);
        assert_eq!(store.market_pair("ETH/USDT").unwrap().current_price, 3_100.0);

        assert!(!store.update_market_pair("SOL/USDT", &patch));
        assert_eq!(store.market_pairs().len(), 2);
    }
}
