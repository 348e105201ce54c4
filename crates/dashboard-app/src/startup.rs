//! Initial page loads run once at startup, followed by a log of what the
//! stores now hold.

use chrono::Utc;
use dashboard_core::TimeHorizon;
use dashboard_state::hooks::{
    DashboardData, RecommendationFeed, RiskSettings, SignalFeed, UserData,
};
use dashboard_state::selectors::{
    active_goals, days_remaining, goal_progress, on_track_ratio, pending_recommendations,
};
use dashboard_state::{AppContext, DomainStore, FetchOutcome, ViewScope};

/// Load every page the dashboard opens with. Returns the number of fetches
/// that failed.
pub async fn load_initial_pages(ctx: &AppContext, horizon: TimeHorizon) -> usize {
    let scope = ViewScope::new("startup");

    ctx.signals.write().await.set_selected_horizon(horizon);
    let mut signals = SignalFeed::new(ctx, &scope);
    let dashboard = DashboardData::new(ctx, &scope);
    let user = UserData::new(ctx, &scope);
    let recommendations = RecommendationFeed::new(ctx, &scope);
    let risk = RiskSettings::new(ctx, &scope);

    let (dashboard, signals, user, recommendations, risk) = tokio::join!(
        dashboard.load(),
        signals.sync(),
        user.ensure_loaded(),
        recommendations.load_history(),
        risk.load(),
    );

    [
        dashboard.exchange,
        dashboard.goals,
        dashboard.balance_history,
        signals,
        user,
        recommendations,
        risk,
    ]
    .iter()
    .filter(|outcome| matches!(outcome, FetchOutcome::Failed(_)))
    .count()
}

pub async fn log_summary(ctx: &AppContext) {
    {
        let exchange = ctx.exchange.read().await;
        if let Some(account) = exchange.account() {
            tracing::info!(
                "Exchange: {} ({:?}), ${:.2} across {} balances, {} market pairs",
                account.exchange_name,
                account.api_key_status,
                account.total_value_usd,
                account.balances.len(),
                exchange.market_pairs().len()
            );
        }
        if let Some(stats) = exchange.portfolio_stats() {
            tracing::info!(
                "Portfolio: P&L ${:.2} ({:.2}%), drawdown {:.2}%",
                stats.total_pnl,
                stats.total_pnl_pct,
                stats.current_drawdown
            );
        }
    }

    {
        let goals = ctx.goals.read().await;
        let active = active_goals(goals.goals());
        match on_track_ratio(goals.goals()) {
            Some(ratio) => tracing::info!(
                "Goals: {} active, {:.0}% on track",
                active.len(),
                ratio * 100.0
            ),
            None => tracing::info!("Goals: none active"),
        }
        let now = Utc::now();
        for goal in active {
            let progress = goal_progress(goal);
            tracing::info!(
                "  {} progress {:.1}% ({} days left)",
                goal.id,
                progress.display_pct,
                days_remaining(goal, now)
            );
        }
    }

    {
        let signals = ctx.signals.read().await;
        tracing::info!(
            "Signals: {} for horizon {}",
            signals.signals().len(),
            signals.selected_horizon()
        );
    }

    {
        let recs = ctx.recommendations.read().await;
        tracing::info!(
            "Recommendations: {} total, {} pending",
            recs.recommendations().len(),
            pending_recommendations(recs.recommendations()).len()
        );
    }

    {
        let risk = ctx.risk.read().await;
        tracing::info!("Risk configs: {}", risk.configs().len());
    }

    {
        let user = ctx.user.read().await;
        if let Some(profile) = user.user() {
            tracing::info!("Signed in as {} ({:?} KYC)", profile.name, profile.kyc_status);
        } else if !user.is_loading() {
            tracing::info!("No user profile loaded");
        }
    }

    for err in ctx.error_summary().await {
        tracing::warn!("{} unavailable: {}", err.store, err.message);
    }
}
