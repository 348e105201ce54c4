use dashboard_core::UserProfilePatch;

use super::{finish_fetch, run_fetch, FetchOutcome};
use crate::context::AppContext;
use crate::scope::{ScopeToken, ViewScope};
use crate::stores::DomainStore;

pub struct UserData {
    ctx: AppContext,
    token: ScopeToken,
}

impl UserData {
    pub fn new(ctx: &AppContext, scope: &ViewScope) -> Self {
        Self {
            ctx: ctx.clone(),
            token: scope.token(),
        }
    }

    /// Fetch the profile unless it is cached or already being fetched.
    pub async fn ensure_loaded(&self) -> FetchOutcome {
        if self.token.is_cancelled() {
            return FetchOutcome::Cancelled;
        }
        {
            // check and raise under one lock so concurrent callers fetch once
            let mut store = self.ctx.user.write().await;
            if store.has_user() || store.is_loading() {
                return FetchOutcome::Skipped;
            }
            store.status_mut().begin();
        }
        finish_fetch(
            &self.token,
            &self.ctx.user,
            "fetch user",
            self.ctx.api.get_profile(),
            |store, user| store.set_user(Some(user)),
        )
        .await
    }

    pub async fn update_profile(&self, patch: &UserProfilePatch) -> FetchOutcome {
        run_fetch(
            &self.token,
            &self.ctx.user,
            "update profile",
            self.ctx.api.update_profile(patch),
            |store, user| store.set_user(Some(user)),
        )
        .await
    }

    /// Drop the cached profile; the next `ensure_loaded` refetches.
    pub async fn clear(&self) {
        self.ctx.user.write().await.clear_user();
    }
}
