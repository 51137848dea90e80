//! Sharing profile API methods for [`GuacamoleClient`].

use std::collections::HashMap;

use crate::client::GuacamoleClient;
use crate::error::Result;
use crate::models::SharingProfile;

impl GuacamoleClient {
    /// List all sharing profiles visible to the authenticated user, keyed
    /// by identifier.
    pub async fn list_sharing_profiles(&self) -> Result<HashMap<String, SharingProfile>> {
        self.get_json(&self.data_path(&["sharingProfiles"]))
            .await
            .map_err(|e| e.context("list sharing profiles"))
    }

    /// Create a new sharing profile and return the created resource with
    /// its server-assigned identifier.
    pub async fn create_sharing_profile(&self, profile: &SharingProfile) -> Result<SharingProfile> {
        self.post_json(&self.data_path(&["sharingProfiles"]), profile)
            .await
            .map_err(|e| e.context("create sharing profile"))
    }

    /// Retrieve the sharing profile with the given identifier.
    ///
    /// The returned profile carries no parameters; call
    /// [`sharing_profile_parameters`](Self::sharing_profile_parameters) for
    /// those.
    pub async fn sharing_profile(&self, id: &str) -> Result<SharingProfile> {
        self.get_json(&self.data_path(&["sharingProfiles", id]))
            .await
            .map_err(|e| e.context(format!("get sharing profile {id}")))
    }

    /// Fetch the parameters for a sharing profile (e.g.
    /// `{"read-only": "true"}`).
    pub async fn sharing_profile_parameters(&self, id: &str) -> Result<HashMap<String, String>> {
        self.get_json(&self.data_path(&["sharingProfiles", id, "parameters"]))
            .await
            .map_err(|e| e.context(format!("get sharing profile parameters {id}")))
    }

    /// Replace the sharing profile identified by `id` with the supplied
    /// value. The identifier inside `profile` is ignored; `id` wins.
    pub async fn update_sharing_profile(&self, id: &str, profile: &SharingProfile) -> Result<()> {
        self.put_json(&self.data_path(&["sharingProfiles", id]), profile)
            .await
            .map_err(|e| e.context(format!("update sharing profile {id}")))
    }

    /// Permanently remove the sharing profile with the given identifier.
    pub async fn delete_sharing_profile(&self, id: &str) -> Result<()> {
        self.delete(&self.data_path(&["sharingProfiles", id]))
            .await
            .map_err(|e| e.context(format!("delete sharing profile {id}")))
    }
}
