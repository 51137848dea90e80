//! JSON Patch operations for permission and membership edits.
//!
//! Guacamole mutates permission sets and membership lists through PATCH
//! requests carrying an RFC 6902-style array of `{op, path, value}`
//! descriptors. The constructors here are pure functions producing
//! descriptors with the fixed paths the server expects; submit them through
//! the `update_*_permissions` / membership methods on
//! [`GuacamoleClient`](crate::GuacamoleClient).
//!
//! The server applies a patch array as a batch; per RFC 6902 convention a
//! failed call is treated as fully not-applied.
//!
//! Patch paths embed raw identifiers without percent-encoding: they are
//! JSON document paths, not URL paths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A permission on an individual resource (connection, connection group,
/// sharing profile, user, or user group).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ObjectPermission {
    Read,
    Update,
    Delete,
    Administer,
}

impl ObjectPermission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "READ",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Administer => "ADMINISTER",
        }
    }
}

impl fmt::Display for ObjectPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A system-level permission, not scoped to any particular resource.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemPermission {
    CreateUser,
    CreateUserGroup,
    CreateConnection,
    CreateConnectionGroup,
    CreateSharingProfile,
    Administer,
}

impl SystemPermission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateUser => "CREATE_USER",
            Self::CreateUserGroup => "CREATE_USER_GROUP",
            Self::CreateConnection => "CREATE_CONNECTION",
            Self::CreateConnectionGroup => "CREATE_CONNECTION_GROUP",
            Self::CreateSharingProfile => "CREATE_SHARING_PROFILE",
            Self::Administer => "ADMINISTER",
        }
    }
}

impl fmt::Display for SystemPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The operation of a patch descriptor.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Remove,
}

/// A single `{op, path, value}` edit descriptor.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PatchOperation {
    pub op: PatchOp,
    pub path: String,
    pub value: String,
}

impl PatchOperation {
    fn new(op: PatchOp, path: String, value: String) -> Self {
        Self { op, path, value }
    }

    /// Grant a permission on a connection.
    pub fn add_connection_permission(connection_id: &str, permission: ObjectPermission) -> Self {
        Self::new(
            PatchOp::Add,
            format!("/connectionPermissions/{connection_id}"),
            permission.to_string(),
        )
    }

    /// Revoke a permission on a connection.
    pub fn remove_connection_permission(connection_id: &str, permission: ObjectPermission) -> Self {
        Self::new(
            PatchOp::Remove,
            format!("/connectionPermissions/{connection_id}"),
            permission.to_string(),
        )
    }

    /// Grant a permission on a connection group.
    pub fn add_connection_group_permission(group_id: &str, permission: ObjectPermission) -> Self {
        Self::new(
            PatchOp::Add,
            format!("/connectionGroupPermissions/{group_id}"),
            permission.to_string(),
        )
    }

    /// Revoke a permission on a connection group.
    pub fn remove_connection_group_permission(
        group_id: &str,
        permission: ObjectPermission,
    ) -> Self {
        Self::new(
            PatchOp::Remove,
            format!("/connectionGroupPermissions/{group_id}"),
            permission.to_string(),
        )
    }

    /// Grant a permission on a sharing profile.
    pub fn add_sharing_profile_permission(profile_id: &str, permission: ObjectPermission) -> Self {
        Self::new(
            PatchOp::Add,
            format!("/sharingProfilePermissions/{profile_id}"),
            permission.to_string(),
        )
    }

    /// Revoke a permission on a sharing profile.
    pub fn remove_sharing_profile_permission(
        profile_id: &str,
        permission: ObjectPermission,
    ) -> Self {
        Self::new(
            PatchOp::Remove,
            format!("/sharingProfilePermissions/{profile_id}"),
            permission.to_string(),
        )
    }

    /// Grant a permission on a user account.
    pub fn add_user_permission(username: &str, permission: ObjectPermission) -> Self {
        Self::new(
            PatchOp::Add,
            format!("/userPermissions/{username}"),
            permission.to_string(),
        )
    }

    /// Revoke a permission on a user account.
    pub fn remove_user_permission(username: &str, permission: ObjectPermission) -> Self {
        Self::new(
            PatchOp::Remove,
            format!("/userPermissions/{username}"),
            permission.to_string(),
        )
    }

    /// Grant a permission on a user group.
    pub fn add_user_group_permission(group_id: &str, permission: ObjectPermission) -> Self {
        Self::new(
            PatchOp::Add,
            format!("/userGroupPermissions/{group_id}"),
            permission.to_string(),
        )
    }

    /// Revoke a permission on a user group.
    pub fn remove_user_group_permission(group_id: &str, permission: ObjectPermission) -> Self {
        Self::new(
            PatchOp::Remove,
            format!("/userGroupPermissions/{group_id}"),
            permission.to_string(),
        )
    }

    /// Grant a system-level permission. The permission name travels in the
    /// value; there is no identifier segment.
    pub fn add_system_permission(permission: SystemPermission) -> Self {
        Self::new(
            PatchOp::Add,
            "/systemPermissions".to_string(),
            permission.to_string(),
        )
    }

    /// Revoke a system-level permission.
    pub fn remove_system_permission(permission: SystemPermission) -> Self {
        Self::new(
            PatchOp::Remove,
            "/systemPermissions".to_string(),
            permission.to_string(),
        )
    }

    /// Add a member (user or group) to a membership list. Used with the
    /// `userGroups`, `memberUsers`, and `memberUserGroups` endpoints, all of
    /// which patch against the list root "/" with the member identifier as
    /// the value.
    pub fn add_membership(identifier: &str) -> Self {
        Self::new(PatchOp::Add, "/".to_string(), identifier.to_string())
    }

    /// Remove a member (user or group) from a membership list.
    pub fn remove_membership(identifier: &str) -> Self {
        Self::new(PatchOp::Remove, "/".to_string(), identifier.to_string())
    }
}
