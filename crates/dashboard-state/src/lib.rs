//! Client-side state layer of the trading dashboard.
//!
//! One [`AppContext`] is built per application instance. It owns a handle to
//! every domain store and the API used to populate them. Views create a
//! [`ViewScope`] and drive the page hooks in [`hooks`]; the rendering layer
//! reads store state and derives display values through [`selectors`].

pub mod context;
pub mod hooks;
pub mod scope;
pub mod selectors;
pub mod stores;

#[cfg(test)]
mod fake_api;
#[cfg(test)]
mod fixtures;

pub use context::AppContext;
pub use hooks::FetchOutcome;
pub use scope::{ScopeToken, ViewScope};
pub use stores::{DomainStore, FetchStatus, LoadPhase, StoreHandle};
