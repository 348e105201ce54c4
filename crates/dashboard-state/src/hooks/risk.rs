use dashboard_core::{NewRiskConfig, RiskConfigPatch};

use super::{run_fetch, FetchOutcome};
use crate::context::AppContext;
use crate::scope::{ScopeToken, ViewScope};

/// Settings page: risk configurations.
pub struct RiskSettings {
    ctx: AppContext,
    token: ScopeToken,
}

impl RiskSettings {
    pub fn new(ctx: &AppContext, scope: &ViewScope) -> Self {
        Self {
            ctx: ctx.clone(),
            token: scope.token(),
        }
    }

    pub async fn load(&self) -> FetchOutcome {
        run_fetch(
            &self.token,
            &self.ctx.risk,
            "fetch risk configs",
            self.ctx.api.get_risk_configs(),
            |store, configs| {
                let active = store.active_config().map(|c| c.id.clone());
                store.set_configs(configs);
                // keep the selection pointing at the refreshed copy
                match active {
                    Some(id) if !store.activate(&id) => store.set_active_config(None),
                    _ => {}
                }
            },
        )
        .await
    }

    pub async fn create(&self, config: &NewRiskConfig) -> FetchOutcome {
        run_fetch(
            &self.token,
            &self.ctx.risk,
            "create risk config",
            self.ctx.api.create_risk_config(config),
            |store, created| store.add_config(created),
        )
        .await
    }

    pub async fn update(&self, id: &str, patch: &RiskConfigPatch) -> FetchOutcome {
        run_fetch(
            &self.token,
            &self.ctx.risk,
            "update risk config",
            self.ctx.api.update_risk_config(id, patch),
            |store, updated| store.upsert_config(updated),
        )
        .await
    }

    pub async fn delete(&self, id: &str) -> FetchOutcome {
        run_fetch(
            &self.token,
            &self.ctx.risk,
            "delete risk config",
            self.ctx.api.delete_risk_config(id),
            |store, ()| {
                store.remove_config(id);
            },
        )
        .await
    }

    /// Local selection only.
    pub async fn activate(&self, id: &str) -> bool {
        self.ctx.risk.write().await.activate(id)
    }
}
