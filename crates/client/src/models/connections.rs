//! Connection models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Attributes;

/// A Guacamole remote desktop connection.
///
/// `parameters` holds the protocol-specific settings (hostname, port,
/// credentials, ...) and is only accepted on the write path; reads never
/// populate it. Fetch parameters separately via
/// [`connection_parameters`](crate::GuacamoleClient::connection_parameters).
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// Server-assigned identifier. Leave `None` when creating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub name: String,
    /// Identifier of the parent connection group ("ROOT" for top level).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_identifier: Option<String>,
    /// Protocol name, e.g. "ssh", "rdp", "vnc".
    pub protocol: String,
    /// Protocol parameters; write-only.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, String>,
    /// Always serialized, `{}` when empty.
    #[serde(default)]
    pub attributes: Attributes,
    /// Number of currently-active sessions using this connection. Read-only.
    #[serde(default)]
    pub active_connections: u32,
}
