//! User group API methods for [`GuacamoleClient`].
//!
//! Membership is exposed from both sides: `member_users` /
//! `member_user_groups` manage what is *inside* a group, while the
//! `user_group_parent_groups` endpoints manage which groups the group
//! itself *belongs to*. The two directions are independent, symmetric
//! sub-paths on the server.

use std::collections::HashMap;

use crate::client::GuacamoleClient;
use crate::error::Result;
use crate::models::{Permissions, UserGroup};
use crate::patch::PatchOperation;

impl GuacamoleClient {
    /// List all user groups visible to the authenticated user, keyed by
    /// identifier.
    pub async fn list_user_groups(&self) -> Result<HashMap<String, UserGroup>> {
        self.get_json(&self.data_path(&["userGroups"]))
            .await
            .map_err(|e| e.context("list user groups"))
    }

    /// Create a new user group and return the created resource.
    pub async fn create_user_group(&self, group: &UserGroup) -> Result<UserGroup> {
        self.post_json(&self.data_path(&["userGroups"]), group)
            .await
            .map_err(|e| e.context("create user group"))
    }

    /// Retrieve the user group with the given identifier.
    pub async fn user_group(&self, id: &str) -> Result<UserGroup> {
        self.get_json(&self.data_path(&["userGroups", id]))
            .await
            .map_err(|e| e.context(format!("get user group {id}")))
    }

    /// Replace the user group identified by `id` with the supplied value.
    /// The identifier inside `group` is ignored; `id` wins.
    pub async fn update_user_group(&self, id: &str, group: &UserGroup) -> Result<()> {
        self.put_json(&self.data_path(&["userGroups", id]), group)
            .await
            .map_err(|e| e.context(format!("update user group {id}")))
    }

    /// Permanently remove the user group with the given identifier.
    pub async fn delete_user_group(&self, id: &str) -> Result<()> {
        self.delete(&self.data_path(&["userGroups", id]))
            .await
            .map_err(|e| e.context(format!("delete user group {id}")))
    }

    /// The explicit permissions granted to the group, applying to all of
    /// its members.
    pub async fn user_group_permissions(&self, id: &str) -> Result<Permissions> {
        self.get_json(&self.data_path(&["userGroups", id, "permissions"]))
            .await
            .map_err(|e| e.context(format!("get user group permissions {id}")))
    }

    /// Apply the given patch operations to the group's permissions.
    pub async fn update_user_group_permissions(
        &self,
        id: &str,
        ops: &[PatchOperation],
    ) -> Result<()> {
        self.patch_ops(&self.data_path(&["userGroups", id, "permissions"]), ops)
            .await
            .map_err(|e| e.context(format!("update user group permissions {id}")))
    }

    /// The usernames of users who are direct members of the group.
    pub async fn user_group_member_users(&self, id: &str) -> Result<Vec<String>> {
        self.get_json(&self.data_path(&["userGroups", id, "memberUsers"]))
            .await
            .map_err(|e| e.context(format!("get member users of group {id}")))
    }

    /// Apply the given patch operations to the group's member user list.
    /// Build the operations with [`PatchOperation::add_membership`] /
    /// [`PatchOperation::remove_membership`].
    pub async fn update_user_group_member_users(
        &self,
        id: &str,
        ops: &[PatchOperation],
    ) -> Result<()> {
        self.patch_ops(&self.data_path(&["userGroups", id, "memberUsers"]), ops)
            .await
            .map_err(|e| e.context(format!("update member users of group {id}")))
    }

    /// The identifiers of child user groups nested within the group.
    pub async fn user_group_member_groups(&self, id: &str) -> Result<Vec<String>> {
        self.get_json(&self.data_path(&["userGroups", id, "memberUserGroups"]))
            .await
            .map_err(|e| e.context(format!("get member groups of group {id}")))
    }

    /// Apply the given patch operations to the group's nested-group list.
    pub async fn update_user_group_member_groups(
        &self,
        id: &str,
        ops: &[PatchOperation],
    ) -> Result<()> {
        self.patch_ops(&self.data_path(&["userGroups", id, "memberUserGroups"]), ops)
            .await
            .map_err(|e| e.context(format!("update member groups of group {id}")))
    }

    /// The identifiers of the groups that this group is itself a direct
    /// member of.
    pub async fn user_group_parent_groups(&self, id: &str) -> Result<Vec<String>> {
        self.get_json(&self.data_path(&["userGroups", id, "userGroups"]))
            .await
            .map_err(|e| e.context(format!("get parent groups of group {id}")))
    }

    /// Apply the given patch operations to the set of groups this group
    /// belongs to.
    pub async fn update_user_group_parent_groups(
        &self,
        id: &str,
        ops: &[PatchOperation],
    ) -> Result<()> {
        self.patch_ops(&self.data_path(&["userGroups", id, "userGroups"]), ops)
            .await
            .map_err(|e| e.context(format!("update parent groups of group {id}")))
    }
}
