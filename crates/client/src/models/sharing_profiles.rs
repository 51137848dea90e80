//! Sharing profile models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Attributes;

/// A sharing profile attached to a connection. It defines a secondary set of
/// parameters used when a session is shared, most commonly
/// `{"read-only": "true"}`.
///
/// Like connections, `parameters` is write-only; fetch it separately via
/// [`sharing_profile_parameters`](crate::GuacamoleClient::sharing_profile_parameters).
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SharingProfile {
    /// Server-assigned identifier. Leave `None` when creating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub name: String,
    /// The connection this profile shares.
    pub primary_connection_identifier: String,
    /// Write-only.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, String>,
    /// Always serialized, `{}` when empty.
    #[serde(default)]
    pub attributes: Attributes,
}
