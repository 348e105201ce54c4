use dashboard_core::{RiskConfig, RiskConfigPatch};

use super::{DomainStore, FetchStatus};

/// Named risk configurations; at most one is active.
#[derive(Debug, Clone, Default)]
pub struct RiskStore {
    configs: Vec<RiskConfig>,
    active_config: Option<RiskConfig>,
    status: FetchStatus,
}

impl RiskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configs(&self) -> &[RiskConfig] {
        &self.configs
    }

    pub fn active_config(&self) -> Option<&RiskConfig> {
        self.active_config.as_ref()
    }

    pub fn config(&self, id: &str) -> Option<&RiskConfig> {
        self.configs.iter().find(|c| c.id == id)
    }

    pub fn set_configs(&mut self, configs: Vec<RiskConfig>) {
        self.configs = configs;
    }

    pub fn set_active_config(&mut self, config: Option<RiskConfig>) {
        self.active_config = config;
    }

    pub fn add_config(&mut self, config: RiskConfig) {
        self.configs.push(config);
    }

    pub fn update_config(&mut self, id: &str, patch: &RiskConfigPatch) -> bool {
        let mut found = false;
        for config in self.configs.iter_mut().filter(|c| c.id == id) {
            patch.apply(config);
            found = true;
        }
        if let Some(active) = self.active_config.as_mut().filter(|c| c.id == id) {
            patch.apply(active);
        }
        found
    }

    pub fn upsert_config(&mut self, config: RiskConfig) {
        if let Some(active) = self.active_config.as_mut().filter(|c| c.id == config.id) {
            *active = config.clone();
        }
        match self.configs.iter_mut().find(|c| c.id == config.id) {
            Some(existing) => *existing = config,
            None => self.configs.push(config),
        }
    }

    pub fn remove_config(&mut self, id: &str) -> bool {
        let before = self.configs.len();
        self.configs.retain(|c| c.id != id);
        if self.active_config.as_ref().is_some_and(|c| c.id == id) {
            self.active_config = None;
        }
        self.configs.len() != before
    }

    /// Mark a known config as active. Unknown ids leave the selection as is.
    pub fn activate(&mut self, id: &str) -> bool {
        match self.config(id).cloned() {
            Some(config) => {
                self.active_config = Some(config);
                true
            }
            None => false,
        }
    }
}

impl DomainStore for RiskStore {
    const NAME: &'static str = "risk";

    fn status(&self) -> &FetchStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut FetchStatus {
        &mut self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_activate_and_update_stay_in_sync() {
        let mut store = RiskStore::new();
        store.set_configs(vec![
            fixtures::risk_config("conservative"),
            fixtures::risk_config("balanced"),
        ]);
        assert!(store.activate("balanced"));
        assert!(!store.activate("missing"));
        assert_eq!(store.active_config().map(|c| c.id.as_str()), Some("balanced"));

        let patch = RiskConfigPatch {
            max_drawdown: Some(8.0),
            leverage_enabled: Some(true),
            ..Default::default()
        };
        assert!(store.update_config("balanced", &patch));
        assert_eq!(store.config("balanced"), store.active_config());
        assert_eq!(store.active_config().unwrap().max_drawdown, 8.0);
        assert_eq!(store.config("conservative").unwrap().max_drawdown, 10.0);
    }

    #[test]
    fn test_remove_active_config_clears_selection() {
        let mut store = RiskStore::new();
        store.add_config(fixtures::risk_config("a"));
        store.add_config(fixtures::risk_config("b"));
        store.activate("a");

        assert!(store.remove_config("a"));
        assert!(store.active_config().is_none());
        assert_eq!(store.configs().len(), 1);
    }
}
