use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Inactive,
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    Pending,
    Verified,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmlStatus {
    Clear,
    Flagged,
    UnderReview,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub account_status: AccountStatus,
    pub kyc_status: KycStatus,
    pub aml_status: AmlStatus,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl UserProfilePatch {
    pub fn apply(&self, user: &mut UserProfile) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(country) = &self.country {
            user.country = country.clone();
        }
    }
}

// ---------------------------------------------------------------------------
// Risk controls
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Conservative,
    Moderate,
    Aggressive,
}

/// Caps are percentages (20.0 means 20%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskConfig {
    pub id: String,
    pub name: String,
    pub per_asset_cap: f64,
    pub sector_cap: f64,
    #[serde(rename = "maxDailyVaR")]
    pub max_daily_var: f64,
    pub max_drawdown: f64,
    pub max_slippage: f64,
    pub stablecoin_buffer: f64,
    pub whitelist: Vec<String>,
    pub blacklist: Vec<String>,
    pub spot_only: bool,
    pub leverage_enabled: bool,
    pub futures_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of a risk config creation: everything but the server-assigned fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRiskConfig {
    pub name: String,
    pub per_asset_cap: f64,
    pub sector_cap: f64,
    #[serde(rename = "maxDailyVaR")]
    pub max_daily_var: f64,
    pub max_drawdown: f64,
    pub max_slippage: f64,
    pub stablecoin_buffer: f64,
    pub whitelist: Vec<String>,
    pub blacklist: Vec<String>,
    pub spot_only: bool,
    pub leverage_enabled: bool,
    pub futures_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_asset_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_cap: Option<f64>,
    #[serde(rename = "maxDailyVaR", skip_serializing_if = "Option::is_none")]
    pub max_daily_var: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_drawdown: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_slippage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stablecoin_buffer: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whitelist: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blacklist: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leverage_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub futures_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RiskConfigPatch {
    pub fn apply(&self, config: &mut RiskConfig) {
        if let Some(v) = &self.name {
            config.name = v.clone();
        }
        if let Some(v) = self.per_asset_cap {
            config.per_asset_cap = v;
        }
        if let Some(v) = self.sector_cap {
            config.sector_cap = v;
        }
        if let Some(v) = self.max_daily_var {
            config.max_daily_var = v;
        }
        if let Some(v) = self.max_drawdown {
            config.max_drawdown = v;
        }
        if let Some(v) = self.max_slippage {
            config.max_slippage = v;
        }
        if let Some(v) = self.stablecoin_buffer {
            config.stablecoin_buffer = v;
        }
        if let Some(v) = &self.whitelist {
            config.whitelist = v.clone();
        }
        if let Some(v) = &self.blacklist {
            config.blacklist = v.clone();
        }
        if let Some(v) = self.spot_only {
            config.spot_only = v;
        }
        if let Some(v) = self.leverage_enabled {
            config.leverage_enabled = v;
        }
        if let Some(v) = self.futures_enabled {
            config.futures_enabled = v;
        }
        if let Some(v) = self.updated_at {
            config.updated_at = v;
        }
    }
}

// ---------------------------------------------------------------------------
// Signals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalLabel {
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    Buy,
    Neutral,
    Sell,
    #[serde(rename = "Strong Sell")]
    StrongSell,
}

impl SignalLabel {
    pub fn is_buy(&self) -> bool {
        matches!(self, SignalLabel::StrongBuy | SignalLabel::Buy)
    }

    pub fn is_sell(&self) -> bool {
        matches!(self, SignalLabel::StrongSell | SignalLabel::Sell)
    }
}

/// Forecast window a signal applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeHorizon {
    #[serde(rename = "1D")]
    OneDay,
    #[default]
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
}

impl TimeHorizon {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeHorizon::OneDay => "1D",
            TimeHorizon::OneWeek => "1W",
            TimeHorizon::OneMonth => "1M",
        }
    }
}

impl fmt::Display for TimeHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeHorizon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1D" => Ok(TimeHorizon::OneDay),
            "1W" => Ok(TimeHorizon::OneWeek),
            "1M" => Ok(TimeHorizon::OneMonth),
            other => Err(format!("unknown time horizon: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalReason {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub id: String,
    pub asset: String,
    pub label: SignalLabel,
    /// Probability of a price increase, 0-1.
    pub prob_up: f64,
    pub expected_move_pct: f64,
    /// 0-1
    pub confidence: f64,
    pub horizon: TimeHorizon,
    #[serde(default)]
    pub reasons: Vec<SignalReason>,
    #[serde(default)]
    pub risk_flags: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Goals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalConstraints {
    pub spot_only: bool,
    pub max_asset_weight_pct: f64,
    pub max_drawdown_pct: f64,
    pub max_daily_var_pct: f64,
    #[serde(default)]
    pub blacklist: Vec<String>,
    #[serde(default)]
    pub whitelist: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub asset: String,
    /// Percentage, 0-100.
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopType {
    Trailing,
    Fixed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLoss {
    pub asset: String,
    #[serde(rename = "type")]
    pub stop_type: StopType,
    pub value_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitBreaker {
    pub to_stable_on_drawdown_pct: f64,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStyle {
    #[serde(rename = "TWAP")]
    Twap,
    #[serde(rename = "VWAP")]
    Vwap,
    Smart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPlan {
    pub style: ExecutionStyle,
    pub rebalance_hours: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPlan {
    pub allocations: Vec<AssetAllocation>,
    pub exec: ExecutionPlan,
    #[serde(default)]
    pub stops: Vec<StopLoss>,
    pub circuit_breakers: CircuitBreaker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Completed,
    Paused,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackingStatus {
    OnTrack,
    Behind,
    Ahead,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub capital_usd: f64,
    pub target_return_pct: f64,
    pub horizon_days: i64,
    pub risk_profile: RiskLevel,
    pub constraints: GoalConstraints,
    pub plan: GoalPlan,
    /// Probability to hit the target, 0-1.
    pub prob_to_hit: f64,
    pub current_return_pct: f64,
    pub tracking_status: TrackingStatus,
    pub status: GoalStatus,
    #[serde(default)]
    pub explain: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capital_usd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_return_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizon_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_profile: Option<RiskLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<GoalConstraints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<GoalPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prob_to_hit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_return_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_status: Option<TrackingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GoalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explain: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl GoalPatch {
    pub fn status(status: GoalStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn apply(&self, goal: &mut Goal) {
        if let Some(v) = self.capital_usd {
            goal.capital_usd = v;
        }
        if let Some(v) = self.target_return_pct {
            goal.target_return_pct = v;
        }
        if let Some(v) = self.horizon_days {
            goal.horizon_days = v;
        }
        if let Some(v) = self.risk_profile {
            goal.risk_profile = v;
        }
        if let Some(v) = &self.constraints {
            goal.constraints = v.clone();
        }
        if let Some(v) = &self.plan {
            goal.plan = v.clone();
        }
        if let Some(v) = self.prob_to_hit {
            goal.prob_to_hit = v;
        }
        if let Some(v) = self.current_return_pct {
            goal.current_return_pct = v;
        }
        if let Some(v) = self.tracking_status {
            goal.tracking_status = v;
        }
        if let Some(v) = self.status {
            goal.status = v;
        }
        if let Some(v) = &self.explain {
            goal.explain = v.clone();
        }
        if let Some(v) = self.updated_at {
            goal.updated_at = v;
        }
    }
}

/// Goal creation body. The goals service takes snake_case keys here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGoalRequest {
    pub capital_usd: f64,
    pub target_return_pct: f64,
    pub horizon_days: i64,
    pub risk_profile: RiskLevel,
    pub constraints: CreateGoalConstraints,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGoalConstraints {
    pub spot_only: bool,
    pub max_asset_weight_pct: f64,
    pub max_drawdown_pct: f64,
    pub max_daily_var_pct: f64,
    pub blacklist: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitelist: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteGoalRequest {
    pub dry_run: bool,
    pub confirm_changes: bool,
}

// ---------------------------------------------------------------------------
// Exchange
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub asset: String,
    pub available: f64,
    pub allocated: f64,
    pub total: f64,
    pub value_usd: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPair {
    /// e.g. "BTC/USDT"
    pub symbol: String,
    pub base_asset: String,
    pub quote_asset: String,
    pub current_price: f64,
    /// Percentage
    pub change_24h: f64,
    pub volume_24h: f64,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPairPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_24h: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_24h: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl MarketPairPatch {
    pub fn apply(&self, pair: &mut MarketPair) {
        if let Some(v) = self.current_price {
            pair.current_price = v;
        }
        if let Some(v) = self.change_24h {
            pair.change_24h = v;
        }
        if let Some(v) = self.volume_24h {
            pair.volume_24h = v;
        }
        if let Some(v) = self.last_updated {
            pair.last_updated = v;
        }
    }
}

impl From<&MarketPair> for MarketPairPatch {
    fn from(pair: &MarketPair) -> Self {
        Self {
            current_price: Some(pair.current_price),
            change_24h: Some(pair.change_24h),
            volume_24h: Some(pair.volume_24h),
            last_updated: Some(pair.last_updated),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyStatus {
    Connected,
    Disconnected,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeAccount {
    pub id: String,
    pub exchange_name: String,
    pub api_key_status: ApiKeyStatus,
    pub balances: Vec<Balance>,
    pub total_value_usd: f64,
    pub last_synced: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    pub total_balance: f64,
    #[serde(rename = "totalPnL")]
    pub total_pnl: f64,
    #[serde(rename = "totalPnLPct")]
    pub total_pnl_pct: f64,
    #[serde(rename = "dailyVaR")]
    pub daily_var: f64,
    pub current_drawdown: f64,
    pub allocation: Vec<AssetAllocation>,
}

// ---------------------------------------------------------------------------
// Trading history
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Market,
    Limit,
    StopLoss,
    TakeProfit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Partial,
    Filled,
    Cancelled,
    Rejected,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Partial => "partial",
            OrderStatus::Filled => "filled",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub asset: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub side: OrderSide,
    pub amount: f64,
    pub price: f64,
    pub filled: f64,
    pub remaining: f64,
    pub status: OrderStatus,
    pub total_value: f64,
    pub fee: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub order_id: String,
    pub asset: String,
    pub side: OrderSide,
    pub amount: f64,
    pub execution_price: f64,
    pub total_value: f64,
    pub fee: f64,
    pub pnl: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceHistory {
    pub timestamp: DateTime<Utc>,
    pub total_value_usd: f64,
    pub pnl_pct: f64,
    pub pnl_usd: f64,
}

/// History filters. Every field is optional; `merge` lets set fields win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeHistoryFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl TradeHistoryFilters {
    pub fn asset(asset: impl Into<String>) -> Self {
        Self {
            asset: Some(asset.into()),
            ..Default::default()
        }
    }

    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn side(side: OrderSide) -> Self {
        Self {
            side: Some(side),
            ..Default::default()
        }
    }

    pub fn date_range(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            ..Default::default()
        }
    }

    /// Shallow merge: fields set in `partial` replace ours, unset ones are kept.
    pub fn merge(&mut self, partial: TradeHistoryFilters) {
        if partial.start_date.is_some() {
            self.start_date = partial.start_date;
        }
        if partial.end_date.is_some() {
            self.end_date = partial.end_date;
        }
        if partial.asset.is_some() {
            self.asset = partial.asset;
        }
        if partial.side.is_some() {
            self.side = partial.side;
        }
        if partial.status.is_some() {
            self.status = partial.status;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == TradeHistoryFilters::default()
    }
}

// ---------------------------------------------------------------------------
// AI recommendations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationAction {
    Rebalance,
    Buy,
    Sell,
    Hold,
    ExitToStable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketRegime {
    Bull,
    Bear,
    Chop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetSignalDirection {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationStatus {
    Pending,
    Approved,
    Rejected,
    Executed,
}

impl RecommendationStatus {
    /// pending -> approved | rejected, approved -> executed.
    pub fn can_transition_to(&self, next: RecommendationStatus) -> bool {
        matches!(
            (self, next),
            (RecommendationStatus::Pending, RecommendationStatus::Approved)
                | (RecommendationStatus::Pending, RecommendationStatus::Rejected)
                | (RecommendationStatus::Approved, RecommendationStatus::Executed)
        )
    }
}

/// Allocation move for one asset, in portfolio percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationChange {
    pub asset: String,
    pub from: f64,
    pub to: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSignal {
    pub asset: String,
    pub signal: AssetSignalDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AIRecommendation {
    pub id: String,
    pub action: RecommendationAction,
    pub changes: Vec<AllocationChange>,
    #[serde(default)]
    pub reasoning: Vec<String>,
    pub confidence: f64,
    /// 1-10 scale
    pub risk_score: f64,
    pub market_regime: MarketRegime,
    #[serde(default)]
    pub asset_signals: Vec<AssetSignal>,
    pub timestamp: DateTime<Utc>,
    pub status: RecommendationStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RejectRecommendationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
