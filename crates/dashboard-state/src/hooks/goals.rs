use dashboard_core::{CreateGoalRequest, Goal, GoalPatch};

use super::{run_fetch, FetchOutcome};
use crate::context::AppContext;
use crate::scope::{ScopeToken, ViewScope};

/// Goals page and goal actions. Server responses are written back to the
/// goal store so the list and the opened goal stay in step.
pub struct GoalsData {
    ctx: AppContext,
    token: ScopeToken,
}

impl GoalsData {
    pub fn new(ctx: &AppContext, scope: &ViewScope) -> Self {
        Self {
            ctx: ctx.clone(),
            token: scope.token(),
        }
    }

    pub async fn load(&self) -> FetchOutcome {
        run_fetch(
            &self.token,
            &self.ctx.goals,
            "fetch goals",
            self.ctx.api.get_goals(),
            |store, goals| store.set_goals(goals),
        )
        .await
    }

    /// Fetch one goal and make it the active goal.
    pub async fn open(&self, id: &str) -> FetchOutcome {
        run_fetch(
            &self.token,
            &self.ctx.goals,
            "fetch goal",
            self.ctx.api.get_goal(id),
            |store, goal| {
                store.upsert_goal(goal.clone());
                store.set_active_goal(Some(goal));
            },
        )
        .await
    }

    pub async fn create(&self, request: &CreateGoalRequest) -> FetchOutcome {
        run_fetch(
            &self.token,
            &self.ctx.goals,
            "create goal",
            self.ctx.api.create_goal(request),
            |store, goal| store.add_goal(goal),
        )
        .await
    }

    pub async fn update(&self, id: &str, patch: &GoalPatch) -> FetchOutcome {
        run_fetch(
            &self.token,
            &self.ctx.goals,
            "update goal",
            self.ctx.api.update_goal(id, patch),
            |store, goal| store.upsert_goal(goal),
        )
        .await
    }

    pub async fn execute(&self, id: &str) -> FetchOutcome {
        run_fetch(
            &self.token,
            &self.ctx.goals,
            "execute goal",
            self.ctx.api.execute_goal(id, false),
            |store, goal| store.upsert_goal(goal),
        )
        .await
    }

    /// Dry-run execution. The preview is returned, never stored.
    pub async fn preview_execution(&self, id: &str) -> (FetchOutcome, Option<Goal>) {
        let mut preview = None;
        let outcome = run_fetch(
            &self.token,
            &self.ctx.goals,
            "execute goal",
            self.ctx.api.execute_goal(id, true),
            |_, goal| preview = Some(goal),
        )
        .await;
        (outcome, preview)
    }

    pub async fn pause(&self, id: &str) -> FetchOutcome {
        run_fetch(
            &self.token,
            &self.ctx.goals,
            "pause goal",
            self.ctx.api.pause_goal(id),
            |store, goal| store.upsert_goal(goal),
        )
        .await
    }

    pub async fn delete(&self, id: &str) -> FetchOutcome {
        run_fetch(
            &self.token,
            &self.ctx.goals,
            "delete goal",
            self.ctx.api.delete_goal(id),
            |store, ()| {
                store.remove_goal(id);
            },
        )
        .await
    }
}
