//! Active connection models.

use serde::{Deserialize, Serialize};

/// A currently-active remote desktop session. Transient: it exists only
/// while the session is open and disappears from the active set when the
/// session ends or is killed.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveConnection {
    pub identifier: String,
    /// Identifier of the connection being used.
    pub connection_identifier: String,
    /// Session start time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub start_date: i64,
    /// IP address of the connected client.
    #[serde(default)]
    pub remote_host: String,
    pub username: String,
    #[serde(default)]
    pub active: bool,
}
