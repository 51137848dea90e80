//! User group models.

use serde::{Deserialize, Serialize};

use crate::models::Attributes;

/// A Guacamole user group. The identifier doubles as the primary key and the
/// display name.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserGroup {
    pub identifier: String,
    #[serde(default)]
    pub disabled: bool,
    /// Always serialized, `{}` when empty.
    #[serde(default)]
    pub attributes: Attributes,
}
