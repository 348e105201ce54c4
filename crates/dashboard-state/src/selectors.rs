//! Pure view derivations. Nothing here is stored; call them at render time.

use chrono::{DateTime, Utc};
use dashboard_core::{
    AIRecommendation, Goal, GoalStatus, RecommendationStatus, Signal, SignalLabel, TimeHorizon,
    TrackingStatus,
};

use crate::stores::DomainStore;

const SECONDS_PER_DAY: i64 = 86_400;

// ---------------------------------------------------------------------------
// Goals
// ---------------------------------------------------------------------------

pub fn active_goals(goals: &[Goal]) -> Vec<&Goal> {
    goals.iter().filter(|g| g.status == GoalStatus::Active).collect()
}

pub fn completed_goals(goals: &[Goal]) -> Vec<&Goal> {
    goals
        .iter()
        .filter(|g| g.status == GoalStatus::Completed)
        .collect()
}

/// Active goals that are on track.
pub fn on_track_count(goals: &[Goal]) -> usize {
    goals
        .iter()
        .filter(|g| g.status == GoalStatus::Active && g.tracking_status == TrackingStatus::OnTrack)
        .count()
}

/// On-track share of the active goals; `None` when nothing is active.
pub fn on_track_ratio(goals: &[Goal]) -> Option<f64> {
    let active = active_goals(goals).len();
    if active == 0 {
        return None;
    }
    Some(on_track_count(goals) as f64 / active as f64)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    /// current / target x 100, unclamped.
    pub raw_pct: f64,
    /// `raw_pct` clamped to 0..=100 for progress bars.
    pub display_pct: f64,
}

pub fn goal_progress(goal: &Goal) -> GoalProgress {
    let raw_pct = if goal.target_return_pct == 0.0 {
        0.0
    } else {
        goal.current_return_pct / goal.target_return_pct * 100.0
    };
    GoalProgress {
        raw_pct,
        display_pct: raw_pct.clamp(0.0, 100.0),
    }
}

/// `horizon_days` minus whole days elapsed since creation. Negative once the
/// horizon has passed.
pub fn days_remaining(goal: &Goal, now: DateTime<Utc>) -> i64 {
    let elapsed = (now - goal.created_at).num_seconds();
    goal.horizon_days - elapsed.div_euclid(SECONDS_PER_DAY)
}

// ---------------------------------------------------------------------------
// Signals
// ---------------------------------------------------------------------------

pub fn signals_for_horizon(signals: &[Signal], horizon: TimeHorizon) -> Vec<&Signal> {
    signals.iter().filter(|s| s.horizon == horizon).collect()
}

pub fn recent_signals(signals: &[Signal], limit: usize) -> &[Signal] {
    &signals[..signals.len().min(limit)]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbabilityTone {
    High,
    Medium,
    Low,
}

/// `probability` is 0-1.
pub fn probability_tone(probability: f64) -> ProbabilityTone {
    if probability >= 0.7 {
        ProbabilityTone::High
    } else if probability >= 0.5 {
        ProbabilityTone::Medium
    } else {
        ProbabilityTone::Low
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalTone {
    Buy,
    Sell,
    Neutral,
}

pub fn signal_tone(label: SignalLabel) -> SignalTone {
    if label.is_buy() {
        SignalTone::Buy
    } else if label.is_sell() {
        SignalTone::Sell
    } else {
        SignalTone::Neutral
    }
}

// ---------------------------------------------------------------------------
// Risk
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilizationLevel {
    Ok,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskUtilization {
    pub pct: f64,
    pub level: UtilizationLevel,
    /// Bar fill, capped at 100.
    pub bar_width: f64,
}

/// How much of a risk limit is used. A non-positive limit reads as 0%.
pub fn risk_utilization(value: f64, limit: f64) -> RiskUtilization {
    let pct = if limit > 0.0 { value / limit * 100.0 } else { 0.0 };
    let level = if pct >= 90.0 {
        UtilizationLevel::Critical
    } else if pct >= 70.0 {
        UtilizationLevel::Warning
    } else {
        UtilizationLevel::Ok
    };
    RiskUtilization {
        pct,
        level,
        bar_width: pct.min(100.0),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskScoreTone {
    Low,
    Medium,
    High,
}

/// Recommendation risk score on the 1-10 scale.
pub fn risk_score_tone(score: f64) -> RiskScoreTone {
    if score < 3.0 {
        RiskScoreTone::Low
    } else if score < 6.0 {
        RiskScoreTone::Medium
    } else {
        RiskScoreTone::High
    }
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

pub fn latest_recommendation(recs: &[AIRecommendation]) -> Option<&AIRecommendation> {
    recs.first()
}

pub fn pending_recommendations(recs: &[AIRecommendation]) -> Vec<&AIRecommendation> {
    recs.iter()
        .filter(|r| r.status == RecommendationStatus::Pending)
        .collect()
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A store error ready to be shown next to the section it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    pub store: &'static str,
    pub message: String,
}

pub fn store_error<S: DomainStore>(store: &S) -> Option<StoreError> {
    store.error().map(|message| StoreError {
        store: S::NAME,
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::stores::GoalStore;
    use chrono::Duration;

    fn goal_at(current: f64, target: f64) -> Goal {
        Goal {
            current_return_pct: current,
            target_return_pct: target,
            ..fixtures::goal("g")
        }
    }

    #[test]
    fn test_goal_progress_clamps_display_only() {
        let half = goal_progress(&goal_at(2.5, 5.0));
        assert_eq!(half.raw_pct, 50.0);
        assert_eq!(half.display_pct, 50.0);

        let over = goal_progress(&goal_at(6.0, 5.0));
        assert!((over.raw_pct - 120.0).abs() < 1e-9);
        assert_eq!(over.display_pct, 100.0);

        let under = goal_progress(&goal_at(-1.0, 5.0));
        assert!((under.raw_pct + 20.0).abs() < 1e-9);
        assert_eq!(under.display_pct, 0.0);

        assert_eq!(goal_progress(&goal_at(3.0, 0.0)).raw_pct, 0.0);
    }

    #[test]
    fn test_on_track_ratio_counts_active_only() {
        let goals = vec![
            fixtures::goal_with("a", GoalStatus::Active, TrackingStatus::OnTrack),
            fixtures::goal_with("b", GoalStatus::Active, TrackingStatus::Behind),
            fixtures::goal_with("c", GoalStatus::Active, TrackingStatus::OnTrack),
            fixtures::goal_with("d", GoalStatus::Active, TrackingStatus::Ahead),
            fixtures::goal_with("e", GoalStatus::Paused, TrackingStatus::OnTrack),
            fixtures::goal_with("f", GoalStatus::Completed, TrackingStatus::OnTrack),
        ];
        assert_eq!(active_goals(&goals).len(), 4);
        assert_eq!(completed_goals(&goals).len(), 1);
        assert_eq!(on_track_count(&goals), 2);
        assert_eq!(on_track_ratio(&goals), Some(0.5));
        assert_eq!(on_track_ratio(&goals[4..]), None);
    }

    #[test]
    fn test_days_remaining_floors_elapsed_days() {
        let goal = fixtures::goal("g");
        let created = goal.created_at;
        assert_eq!(days_remaining(&goal, created), 30);
        assert_eq!(days_remaining(&goal, created + Duration::hours(23)), 30);
        assert_eq!(days_remaining(&goal, created + Duration::hours(36)), 29);
        assert_eq!(days_remaining(&goal, created + Duration::days(45)), -15);
    }

    #[test]
    fn test_tones() {
        assert_eq!(probability_tone(0.72), ProbabilityTone::High);
        assert_eq!(probability_tone(0.5), ProbabilityTone::Medium);
        assert_eq!(probability_tone(0.49), ProbabilityTone::Low);

        assert_eq!(signal_tone(SignalLabel::StrongBuy), SignalTone::Buy);
        assert_eq!(signal_tone(SignalLabel::Sell), SignalTone::Sell);
        assert_eq!(signal_tone(SignalLabel::Neutral), SignalTone::Neutral);

        assert_eq!(risk_score_tone(2.9), RiskScoreTone::Low);
        assert_eq!(risk_score_tone(3.0), RiskScoreTone::Medium);
        assert_eq!(risk_score_tone(6.0), RiskScoreTone::High);
    }

    #[test]
    fn test_risk_utilization_levels() {
        let ok = risk_utilization(1.0, 2.0);
        assert_eq!(ok.level, UtilizationLevel::Ok);
        assert_eq!(ok.pct, 50.0);

        assert_eq!(risk_utilization(1.5, 2.0).level, UtilizationLevel::Warning);

        let over = risk_utilization(3.0, 2.0);
        assert_eq!(over.level, UtilizationLevel::Critical);
        assert_eq!(over.pct, 150.0);
        assert_eq!(over.bar_width, 100.0);

        assert_eq!(risk_utilization(1.0, 0.0).pct, 0.0);
    }

    #[test]
    fn test_signal_and_recommendation_views() {
        let signals = vec![
            fixtures::signal("1", "BTC", TimeHorizon::OneDay),
            fixtures::signal("2", "ETH", TimeHorizon::OneWeek),
            fixtures::signal("3", "SOL", TimeHorizon::OneDay),
        ];
        assert_eq!(signals_for_horizon(&signals, TimeHorizon::OneDay).len(), 2);
        assert_eq!(recent_signals(&signals, 2).len(), 2);
        assert_eq!(recent_signals(&signals, 10).len(), 3);

        let mut approved = fixtures::recommendation("r2");
        approved.status = RecommendationStatus::Approved;
        let recs = vec![approved, fixtures::recommendation("r1")];
        assert_eq!(latest_recommendation(&recs).map(|r| r.id.as_str()), Some("r2"));
        assert_eq!(pending_recommendations(&recs).len(), 1);
        assert!(latest_recommendation(&[]).is_none());
    }

    #[test]
    fn test_store_error_names_the_store() {
        let mut store = GoalStore::new();
        assert!(store_error(&store).is_none());
        store.set_error(Some("Failed to fetch goals".to_string()));
        assert_eq!(
            store_error(&store),
            Some(StoreError {
                store: "goals",
                message: "Failed to fetch goals".to_string(),
            })
        );
    }
}
