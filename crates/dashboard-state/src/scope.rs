//! Cancellation scope owned by a consuming view.
//!
//! A view holds a [`ViewScope`] for as long as it is mounted and hands a
//! [`ScopeToken`] to every fetch it starts. Closing or dropping the scope
//! cancels the in-flight requests and stops any late result from reaching a
//! store.

use std::future::Future;

use tokio::sync::watch;

pub struct ViewScope {
    name: String,
    closed: watch::Sender<bool>,
}

impl ViewScope {
    pub fn new(name: impl Into<String>) -> Self {
        let (closed, _) = watch::channel(false);
        Self {
            name: name.into(),
            closed,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> ScopeToken {
        ScopeToken {
            closed: self.closed.subscribe(),
        }
    }

    /// Tear the view down. Idempotent.
    pub fn close(&self) {
        if !self.closed.send_replace(true) {
            tracing::debug!("view scope '{}' closed", self.name);
        }
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.close();
    }
}

#[derive(Clone)]
pub struct ScopeToken {
    closed: watch::Receiver<bool>,
}

impl ScopeToken {
    pub fn is_cancelled(&self) -> bool {
        // a dropped scope counts as closed
        self.closed.has_changed().is_err() || *self.closed.borrow()
    }

    /// Resolves once the owning scope is closed or dropped.
    pub async fn cancelled(&self) {
        let mut closed = self.closed.clone();
        let _ = closed.wait_for(|closed| *closed).await;
    }

    /// Drive `fut` unless the scope closes first.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.is_cancelled() {
            return None;
        }
        tokio::select! {
            biased;
            _ = self.cancelled() => None,
            out = fut => Some(out),
        }
    }
}
