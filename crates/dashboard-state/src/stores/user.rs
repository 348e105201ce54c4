use dashboard_core::{UserProfile, UserProfilePatch};

use super::{DomainStore, FetchStatus};

/// The signed-in user's profile, fetched once and cached until cleared.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    user: Option<UserProfile>,
    status: FetchStatus,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn has_user(&self) -> bool {
        self.user.is_some()
    }

    pub fn set_user(&mut self, user: Option<UserProfile>) {
        self.user = user;
    }

    pub fn update_user(&mut self, patch: &UserProfilePatch) -> bool {
        match self.user.as_mut() {
            Some(user) => {
                patch.apply(user);
                true
            }
            None => false,
        }
    }

    pub fn clear_user(&mut self) {
        self.user = None;
    }
}

impl DomainStore for UserStore {
    const NAME: &'static str = "user";

    fn status(&self) -> &FetchStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut FetchStatus {
        &mut self.status
    }
}
