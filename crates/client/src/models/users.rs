//! User account models.

use serde::{Deserialize, Serialize};

use crate::models::Attributes;

/// A Guacamole user account.
///
/// `password` is write-only: it is accepted on create/update but never
/// returned by GET. Unset attribute values coming back as `null` are
/// normalised to empty strings.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    /// Write-only. Set to change the password on create/update; leave `None`
    /// to keep it unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    /// Always serialized, `{}` when empty.
    #[serde(default)]
    pub attributes: Attributes,
    /// Last activity time in milliseconds since the Unix epoch. Read-only.
    #[serde(default)]
    pub last_active: i64,
}
