use chrono::{DateTime, Utc};
use dashboard_core::{Signal, TimeHorizon};

use super::{DomainStore, FetchStatus};

#[derive(Debug, Clone, Default)]
pub struct SignalStore {
    signals: Vec<Signal>,
    selected_horizon: TimeHorizon,
    status: FetchStatus,
}

impl SignalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn selected_horizon(&self) -> TimeHorizon {
        self.selected_horizon
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.status.loaded_at()
    }

    /// Wholesale replacement; signals are never edited in place.
    pub fn set_signals(&mut self, signals: Vec<Signal>) {
        self.signals = signals;
    }

    pub fn set_selected_horizon(&mut self, horizon: TimeHorizon) {
        self.selected_horizon = horizon;
    }

    pub fn add_signal(&mut self, signal: Signal) {
        self.signals.push(signal);
    }

    pub fn set_last_updated(&mut self, at: DateTime<Utc>) {
        self.status.set_loaded_at(at);
    }
}

impl DomainStore for SignalStore {
    const NAME: &'static str = "signals";

    fn status(&self) -> &FetchStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut FetchStatus {
        &mut self.status
    }
}
