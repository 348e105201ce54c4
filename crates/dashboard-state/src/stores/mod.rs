pub mod exchange;
pub mod goal;
pub mod history;
pub mod recommendation;
pub mod risk;
pub mod signal;
pub mod user;

pub use exchange::ExchangeStore;
pub use goal::GoalStore;
pub use history::HistoryStore;
pub use recommendation::RecommendationStore;
pub use risk::RiskStore;
pub use signal::SignalStore;
pub use user::UserStore;

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle to a store. Mutations take the write lock only for the
/// duration of one synchronous action.
pub type StoreHandle<S> = Arc<RwLock<S>>;

pub fn handle<S>(store: S) -> StoreHandle<S> {
    Arc::new(RwLock::new(store))
}

/// Where a store is in its fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Populated,
    Errored,
}

/// Loading/error metadata carried by every store.
///
/// Several fetches may target one store at once (the history page loads
/// orders, trades and balances concurrently), so loading is an in-flight
/// count rather than a flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchStatus {
    in_flight: u32,
    error: Option<String>,
    loaded_at: Option<DateTime<Utc>>,
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Time of the last successful fetch.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn phase(&self) -> LoadPhase {
        if self.is_loading() {
            LoadPhase::Loading
        } else if self.error.is_some() {
            LoadPhase::Errored
        } else if self.loaded_at.is_some() {
            LoadPhase::Populated
        } else {
            LoadPhase::Idle
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.in_flight = if loading { self.in_flight.max(1) } else { 0 };
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn set_loaded_at(&mut self, at: DateTime<Utc>) {
        self.loaded_at = Some(at);
    }

    /// Error is cleared before the request goes out, unless another fetch
    /// into the same store is still running; its outcome may be the error.
    pub fn begin(&mut self) {
        if self.in_flight == 0 {
            self.error = None;
        }
        self.in_flight += 1;
    }

    pub fn succeed(&mut self, at: DateTime<Utc>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.loaded_at = Some(at);
    }

    pub fn fail(&mut self, message: String) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.error = Some(message);
    }

    /// The consuming view went away; release the slot without writing.
    pub fn abandon(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

/// Contract shared by all domain stores: direct loading/error setters plus
/// the fetch lifecycle used by the hooks.
pub trait DomainStore: Send + Sync {
    /// Short name used in logs and error summaries.
    const NAME: &'static str;

    fn status(&self) -> &FetchStatus;
    fn status_mut(&mut self) -> &mut FetchStatus;

    fn is_loading(&self) -> bool {
        self.status().is_loading()
    }

    fn error(&self) -> Option<&str> {
        self.status().error()
    }

    fn phase(&self) -> LoadPhase {
        self.status().phase()
    }

    fn set_loading(&mut self, loading: bool) {
        self.status_mut().set_loading(loading);
    }

    fn set_error(&mut self, error: Option<String>) {
        self.status_mut().set_error(error);
    }

    fn clear_error(&mut self) {
        self.status_mut().set_error(None);
    }
}
