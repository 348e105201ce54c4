use dashboard_core::{Goal, GoalPatch};

use super::{DomainStore, FetchStatus};

/// Goals plus the goal currently opened in the UI.
///
/// `active_goal` is a copy, so every action that touches a goal by id applies
/// the same change to the selection when the ids match.
#[derive(Debug, Clone, Default)]
pub struct GoalStore {
    goals: Vec<Goal>,
    active_goal: Option<Goal>,
    status: FetchStatus,
}

impl GoalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn active_goal(&self) -> Option<&Goal> {
        self.active_goal.as_ref()
    }

    pub fn goal(&self, id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn set_goals(&mut self, goals: Vec<Goal>) {
        self.goals = goals;
    }

    pub fn set_active_goal(&mut self, goal: Option<Goal>) {
        self.active_goal = goal;
    }

    pub fn add_goal(&mut self, goal: Goal) {
        self.goals.push(goal);
    }

    /// Returns false when no goal has this id.
    pub fn update_goal(&mut self, id: &str, patch: &GoalPatch) -> bool {
        let mut found = false;
        for goal in self.goals.iter_mut().filter(|g| g.id == id) {
            patch.apply(goal);
            found = true;
        }
        if let Some(active) = self.active_goal.as_mut().filter(|g| g.id == id) {
            patch.apply(active);
        }
        found
    }

    /// Replace a goal with the server's copy, appending it if unknown.
    pub fn upsert_goal(&mut self, goal: Goal) {
        if let Some(active) = self.active_goal.as_mut().filter(|g| g.id == goal.id) {
            *active = goal.clone();
        }
        match self.goals.iter_mut().find(|g| g.id == goal.id) {
            Some(existing) => *existing = goal,
            None => self.goals.push(goal),
        }
    }

    pub fn remove_goal(&mut self, id: &str) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        if self.active_goal.as_ref().is_some_and(|g| g.id == id) {
            self.active_goal = None;
        }
        self.goals.len() != before
    }
}

impl DomainStore for GoalStore {
    const NAME: &'static str = "goals";

    fn status(&self) -> &FetchStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut FetchStatus {
        &mut self.status
    }
}
