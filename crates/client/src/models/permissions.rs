//! Permission set models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The full permission set for a user or user group.
///
/// Map keys are resource identifiers (connection identifier, username, ...);
/// values are permission name lists ("READ", "UPDATE", "DELETE",
/// "ADMINISTER"). The maps stay stringly typed on the read side so an
/// unrecognised permission string introduced by a newer server never breaks
/// deserialization; use the typed
/// [`ObjectPermission`](crate::patch::ObjectPermission) /
/// [`SystemPermission`](crate::patch::SystemPermission) enums when
/// constructing patch operations.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    #[serde(default)]
    pub connection_permissions: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub connection_group_permissions: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub sharing_profile_permissions: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub active_connection_permissions: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub user_permissions: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub user_group_permissions: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub system_permissions: Vec<String>,
}
