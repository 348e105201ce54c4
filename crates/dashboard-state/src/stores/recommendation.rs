use chrono::{DateTime, Utc};
use dashboard_core::{AIRecommendation, RecommendationStatus};

use super::{DomainStore, FetchStatus};

/// Recommendations, newest first.
#[derive(Debug, Clone, Default)]
pub struct RecommendationStore {
    recommendations: Vec<AIRecommendation>,
    last_fetched: Option<DateTime<Utc>>,
    status: FetchStatus,
}

impl RecommendationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recommendations(&self) -> &[AIRecommendation] {
        &self.recommendations
    }

    pub fn latest(&self) -> Option<&AIRecommendation> {
        self.recommendations.first()
    }

    pub fn recommendation(&self, id: &str) -> Option<&AIRecommendation> {
        self.recommendations.iter().find(|r| r.id == id)
    }

    pub fn last_fetched(&self) -> Option<DateTime<Utc>> {
        self.last_fetched
    }

    pub fn set_recommendations(&mut self, recommendations: Vec<AIRecommendation>) {
        self.recommendations = recommendations;
    }

    pub fn add_recommendation(&mut self, recommendation: AIRecommendation) {
        self.recommendations.insert(0, recommendation);
    }

    pub fn set_last_fetched(&mut self, at: DateTime<Utc>) {
        self.last_fetched = Some(at);
    }

    /// Applies a status change if the current status allows it.
    ///
    /// Returns false for unknown ids and for refused transitions (for example
    /// rejecting an already executed recommendation).
    pub fn update_recommendation_status(&mut self, id: &str, next: RecommendationStatus) -> bool {
        match self.recommendations.iter_mut().find(|r| r.id == id) {
            Some(rec) if rec.status.can_transition_to(next) => {
                rec.status = next;
                true
            }
            _ => false,
        }
    }
}

impl DomainStore for RecommendationStore {
    const NAME: &'static str = "recommendations";

    fn status(&self) -> &FetchStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut FetchStatus {
        &mut self.status
    }
}
