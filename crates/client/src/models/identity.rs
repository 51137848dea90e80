//! Current authenticated identity models.

use serde::{Deserialize, Serialize};

use crate::models::Attributes;

/// The currently-authenticated user's profile as returned by the `/self`
/// endpoint. Useful for validating credentials and discovering the
/// authenticated username without knowing it in advance.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub username: String,
    #[serde(default)]
    pub disabled: bool,
    /// Last activity time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub last_active: i64,
    #[serde(default)]
    pub attributes: Attributes,
}
