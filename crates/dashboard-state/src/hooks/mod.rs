//! Page-level fetch orchestration.
//!
//! Each hook is bound to the [`ScopeToken`] of the view that created it.
//! Every fetch goes through [`run_fetch`], which owns the loading/error
//! lifecycle of the target store.

pub mod dashboard;
pub mod exchange;
pub mod goals;
pub mod history;
pub mod recommendations;
pub mod risk;
pub mod signals;
pub mod user;

pub use dashboard::{DashboardData, DashboardLoad};
pub use exchange::ExchangeData;
pub use goals::GoalsData;
pub use history::{HistoryData, HistoryLoad};
pub use recommendations::RecommendationFeed;
pub use risk::RiskSettings;
pub use signals::SignalFeed;
pub use user::UserData;

use std::future::Future;

use chrono::Utc;
use dashboard_core::GatewayResult;

use crate::scope::ScopeToken;
use crate::stores::{DomainStore, StoreHandle};

/// What happened to one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded,
    /// Carries the message written to the store.
    Failed(String),
    /// The view went away; nothing was written.
    Cancelled,
    /// No request was needed.
    Skipped,
}

impl FetchOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchOutcome::Loaded)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Run one request against one store.
///
/// `action` names the request for logs and builds the fallback message
/// ("Failed to {action}") used when the error has no text of its own.
/// Loading is raised before the request goes out and always released, and
/// nothing is written once `token` is cancelled.
pub(crate) async fn run_fetch<S, T, Fut, F>(
    token: &ScopeToken,
    store: &StoreHandle<S>,
    action: &str,
    request: Fut,
    apply: F,
) -> FetchOutcome
where
    S: DomainStore,
    Fut: Future<Output = GatewayResult<T>>,
    F: FnOnce(&mut S, T),
{
    if token.is_cancelled() {
        return FetchOutcome::Cancelled;
    }

    store.write().await.status_mut().begin();

    finish_fetch(token, store, action, request, apply).await
}

/// The part of [`run_fetch`] after loading was raised. For callers that
/// `begin` under a lock they also use for something else, such as raising
/// several fetches into one store at once.
pub(crate) async fn finish_fetch<S, T, Fut, F>(
    token: &ScopeToken,
    store: &StoreHandle<S>,
    action: &str,
    request: Fut,
    apply: F,
) -> FetchOutcome
where
    S: DomainStore,
    Fut: Future<Output = GatewayResult<T>>,
    F: FnOnce(&mut S, T),
{
    let result = token.run(request).await;

    let mut guard = store.write().await;
    let result = match result {
        Some(result) if !token.is_cancelled() => result,
        _ => {
            guard.status_mut().abandon();
            tracing::debug!("{}: discarded '{}' after view closed", S::NAME, action);
            return FetchOutcome::Cancelled;
        }
    };

    match result {
        Ok(data) => {
            apply(&mut *guard, data);
            guard.status_mut().succeed(Utc::now());
            tracing::debug!("{}: {} succeeded", S::NAME, action);
            FetchOutcome::Loaded
        }
        Err(e) => {
            let mut message = e.to_string();
            if message.trim().is_empty() {
                message = format!("Failed to {}", action);
            }
            tracing::error!("Failed to {}: {}", action, message);
            guard.status_mut().fail(message.clone());
            FetchOutcome::Failed(message)
        }
    }
}
