use std::time::Instant;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use dashboard_core::HealthStatus;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct HealthState {
    started: Instant,
    environment: String,
}

impl HealthState {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            started: Instant::now(),
            environment: environment.into(),
        }
    }
}

pub fn health_routes(state: HealthState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<HealthState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        uptime: state.started.elapsed().as_secs_f64(),
        environment: state.environment.clone(),
    })
}
