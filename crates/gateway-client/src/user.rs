use dashboard_core::{GatewayResult, UserProfile, UserProfilePatch};
use reqwest::Method;

use crate::client::{GatewayClient, RequestOptions};

impl GatewayClient {
    /// Get current user profile
    pub async fn get_profile(&self) -> GatewayResult<UserProfile> {
        self.fetch_data("/user/profile", RequestOptions::get(), "Failed to fetch user profile")
            .await
    }

    pub async fn update_profile(&self, patch: &UserProfilePatch) -> GatewayResult<UserProfile> {
        let options = RequestOptions::method(Method::PATCH).with_json(patch)?;
        self.fetch_data("/user/profile", options, "Failed to update user profile")
            .await
    }
}
