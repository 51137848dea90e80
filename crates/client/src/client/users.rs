//! User management API methods for [`GuacamoleClient`].
//!
//! # What this module handles:
//! - User CRUD
//! - Explicit and effective permission reads, permission edits
//! - Group membership of a user (which groups the user belongs to)
//! - Per-user login history
//!
//! # What this module does NOT handle:
//! - Group-side membership lists (in [`crate::client::user_groups`])
//! - Patch descriptor construction (see [`crate::patch::PatchOperation`])

use std::collections::HashMap;

use crate::client::GuacamoleClient;
use crate::error::Result;
use crate::models::{HistoryEntry, Permissions, User};
use crate::patch::PatchOperation;

impl GuacamoleClient {
    /// List all users visible to the authenticated user, keyed by username.
    pub async fn list_users(&self) -> Result<HashMap<String, User>> {
        self.get_json(&self.data_path(&["users"]))
            .await
            .map_err(|e| e.context("list users"))
    }

    /// Create a new user and return the created resource. The password of
    /// the returned user is `None`; the API never echoes passwords.
    pub async fn create_user(&self, user: &User) -> Result<User> {
        self.post_json(&self.data_path(&["users"]), user)
            .await
            .map_err(|e| e.context("create user"))
    }

    /// Retrieve the user with the given username.
    pub async fn user(&self, username: &str) -> Result<User> {
        self.get_json(&self.data_path(&["users", username]))
            .await
            .map_err(|e| e.context(format!("get user {username}")))
    }

    /// Replace the user identified by `username` with the supplied value.
    /// Set `password` to change it; leave it `None` to keep it unchanged.
    pub async fn update_user(&self, username: &str, user: &User) -> Result<()> {
        self.put_json(&self.data_path(&["users", username]), user)
            .await
            .map_err(|e| e.context(format!("update user {username}")))
    }

    /// Permanently remove the user with the given username.
    pub async fn delete_user(&self, username: &str) -> Result<()> {
        self.delete(&self.data_path(&["users", username]))
            .await
            .map_err(|e| e.context(format!("delete user {username}")))
    }

    /// The permissions granted directly to the user. Does not include
    /// permissions inherited via group membership; use
    /// [`user_effective_permissions`](Self::user_effective_permissions) for
    /// the full resolved set.
    pub async fn user_permissions(&self, username: &str) -> Result<Permissions> {
        self.get_json(&self.data_path(&["users", username, "permissions"]))
            .await
            .map_err(|e| e.context(format!("get user permissions {username}")))
    }

    /// The full resolved permission set for the user, including permissions
    /// inherited from group memberships.
    pub async fn user_effective_permissions(&self, username: &str) -> Result<Permissions> {
        self.get_json(&self.data_path(&["users", username, "effectivePermissions"]))
            .await
            .map_err(|e| e.context(format!("get user effective permissions {username}")))
    }

    /// Apply the given patch operations to the user's permissions. Build
    /// the operations with the [`PatchOperation`] permission constructors.
    pub async fn update_user_permissions(
        &self,
        username: &str,
        ops: &[PatchOperation],
    ) -> Result<()> {
        self.patch_ops(&self.data_path(&["users", username, "permissions"]), ops)
            .await
            .map_err(|e| e.context(format!("update user permissions {username}")))
    }

    /// The identifiers of the user groups the given user is a direct member
    /// of.
    pub async fn user_user_groups(&self, username: &str) -> Result<Vec<String>> {
        self.get_json(&self.data_path(&["users", username, "userGroups"]))
            .await
            .map_err(|e| e.context(format!("get user groups for {username}")))
    }

    /// Apply the given patch operations to the user's group membership
    /// list. Build the operations with
    /// [`PatchOperation::add_membership`] /
    /// [`PatchOperation::remove_membership`].
    pub async fn update_user_user_groups(
        &self,
        username: &str,
        ops: &[PatchOperation],
    ) -> Result<()> {
        self.patch_ops(&self.data_path(&["users", username, "userGroups"]), ops)
            .await
            .map_err(|e| e.context(format!("update user groups for {username}")))
    }

    /// The login history of one user, most recent first.
    pub async fn user_history(&self, username: &str) -> Result<Vec<HistoryEntry>> {
        self.get_json(&self.data_path(&["users", username, "history"]))
            .await
            .map_err(|e| e.context(format!("get user history {username}")))
    }
}
