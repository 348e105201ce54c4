//! Deterministic builders for tests. Every entity is pinned to `at()`.

use chrono::{DateTime, Duration, TimeZone, Utc};
use dashboard_core::*;

pub fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

pub fn signal(id: &str, asset: &str, horizon: TimeHorizon) -> Signal {
    Signal {
        id: id.to_string(),
        asset: asset.to_string(),
        label: SignalLabel::Buy,
        prob_up: 0.64,
        expected_move_pct: 2.1,
        confidence: 0.7,
        horizon,
        reasons: vec![SignalReason {
            text: "Funding rates normalising".to_string(),
            source: Some("derivatives".to_string()),
            source_url: None,
        }],
        risk_flags: Vec::new(),
        timestamp: at(),
    }
}

pub fn goal(id: &str) -> Goal {
    Goal {
        id: id.to_string(),
        capital_usd: 10_000.0,
        target_return_pct: 5.0,
        horizon_days: 30,
        risk_profile: RiskLevel::Moderate,
        constraints: GoalConstraints {
            spot_only: true,
            max_asset_weight_pct: 40.0,
            max_drawdown_pct: 3.0,
            max_daily_var_pct: 2.0,
            blacklist: Vec::new(),
            whitelist: Vec::new(),
        },
        plan: GoalPlan {
            allocations: vec![
                AssetAllocation {
                    asset: "BTC".to_string(),
                    weight: 60.0,
                    amount: Some(6_000.0),
                },
                AssetAllocation {
                    asset: "ETH".to_string(),
                    weight: 40.0,
                    amount: Some(4_000.0),
                },
            ],
            exec: ExecutionPlan {
                style: ExecutionStyle::Twap,
                rebalance_hours: 24,
            },
            stops: vec![StopLoss {
                asset: "BTC".to_string(),
                stop_type: StopType::Trailing,
                value_pct: 5.0,
            }],
            circuit_breakers: CircuitBreaker {
                to_stable_on_drawdown_pct: 3.0,
                enabled: true,
            },
        },
        prob_to_hit: 0.64,
        current_return_pct: 2.5,
        tracking_status: TrackingStatus::OnTrack,
        status: GoalStatus::Active,
        explain: vec!["Balanced allocation".to_string()],
        created_at: at(),
        updated_at: at(),
    }
}

pub fn goal_with(id: &str, status: GoalStatus, tracking: TrackingStatus) -> Goal {
    Goal {
        status,
        tracking_status: tracking,
        ..goal(id)
    }
}

pub fn create_goal_request() -> CreateGoalRequest {
    CreateGoalRequest {
        capital_usd: 25_000.0,
        target_return_pct: 8.0,
        horizon_days: 60,
        risk_profile: RiskLevel::Aggressive,
        constraints: CreateGoalConstraints {
            spot_only: true,
            max_asset_weight_pct: 50.0,
            max_drawdown_pct: 6.0,
            max_daily_var_pct: 3.0,
            blacklist: Vec::new(),
            whitelist: None,
        },
    }
}

pub fn recommendation(id: &str) -> AIRecommendation {
    AIRecommendation {
        id: id.to_string(),
        action: RecommendationAction::Rebalance,
        changes: vec![AllocationChange {
            asset: "BTC".to_string(),
            from: 20.0,
            to: 25.0,
        }],
        reasoning: vec!["Market oversold (FGI=22)".to_string()],
        confidence: 0.8,
        risk_score: 4.0,
        market_regime: MarketRegime::Chop,
        asset_signals: vec![AssetSignal {
            asset: "BTC".to_string(),
            signal: AssetSignalDirection::Bullish,
        }],
        timestamp: at(),
        status: RecommendationStatus::Pending,
    }
}

pub fn risk_config(id: &str) -> RiskConfig {
    RiskConfig {
        id: id.to_string(),
        name: format!("{} profile", id),
        per_asset_cap: 20.0,
        sector_cap: 40.0,
        max_daily_var: 2.0,
        max_drawdown: 10.0,
        max_slippage: 0.5,
        stablecoin_buffer: 10.0,
        whitelist: Vec::new(),
        blacklist: Vec::new(),
        spot_only: true,
        leverage_enabled: false,
        futures_enabled: false,
        created_at: at(),
        updated_at: at(),
    }
}

pub fn new_risk_config(name: &str) -> NewRiskConfig {
    NewRiskConfig {
        name: name.to_string(),
        per_asset_cap: 15.0,
        sector_cap: 30.0,
        max_daily_var: 1.5,
        max_drawdown: 8.0,
        max_slippage: 0.3,
        stablecoin_buffer: 15.0,
        whitelist: Vec::new(),
        blacklist: Vec::new(),
        spot_only: true,
        leverage_enabled: false,
        futures_enabled: false,
    }
}

pub fn market_pair(symbol: &str, price: f64) -> MarketPair {
    let (base, quote) = symbol.split_once('/').unwrap_or((symbol, "USDT"));
    MarketPair {
        symbol: symbol.to_string(),
        base_asset: base.to_string(),
        quote_asset: quote.to_string(),
        current_price: price,
        change_24h: 0.8,
        volume_24h: 1_250_000.0,
        last_updated: at(),
    }
}

pub fn account() -> ExchangeAccount {
    ExchangeAccount {
        id: "acct-1".to_string(),
        exchange_name: "Binance".to_string(),
        api_key_status: ApiKeyStatus::Connected,
        balances: vec![Balance {
            asset: "USDT".to_string(),
            available: 4_000.0,
            allocated: 6_000.0,
            total: 10_000.0,
            value_usd: 10_000.0,
        }],
        total_value_usd: 10_000.0,
        last_synced: at(),
    }
}

pub fn portfolio_stats() -> PortfolioStats {
    PortfolioStats {
        total_balance: 10_000.0,
        total_pnl: 250.0,
        total_pnl_pct: 2.5,
        daily_var: 1.2,
        current_drawdown: 0.4,
        allocation: Vec::new(),
    }
}

pub fn order(id: &str, asset: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        asset: asset.to_string(),
        order_type: OrderType::Limit,
        side: OrderSide::Buy,
        amount: 0.1,
        price: 64_000.0,
        filled: 0.1,
        remaining: 0.0,
        status,
        total_value: 6_400.0,
        fee: 6.4,
        created_at: at(),
        updated_at: at(),
    }
}

pub fn trade(id: &str, asset: &str, side: OrderSide) -> Trade {
    Trade {
        id: id.to_string(),
        order_id: format!("order-{}", id),
        asset: asset.to_string(),
        side,
        amount: 0.1,
        execution_price: 64_000.0,
        total_value: 6_400.0,
        fee: 6.4,
        pnl: 12.0,
        timestamp: at(),
    }
}

/// One point per day, oldest first.
pub fn balance_history(days: i64) -> Vec<BalanceHistory> {
    (0..days)
        .map(|day| BalanceHistory {
            timestamp: at() + Duration::days(day),
            total_value_usd: 10_000.0 + day as f64 * 25.0,
            pnl_pct: day as f64 * 0.25,
            pnl_usd: day as f64 * 25.0,
        })
        .collect()
}

pub fn user() -> UserProfile {
    UserProfile {
        id: "user-1".to_string(),
        name: "Sam Doe".to_string(),
        email: "sam@example.com".to_string(),
        account_status: AccountStatus::Active,
        kyc_status: KycStatus::Verified,
        aml_status: AmlStatus::Clear,
        country: "SG".to_string(),
        created_at: at(),
        updated_at: at(),
    }
}
