//! Active session API methods for [`GuacamoleClient`].
//!
//! Active connections are transient server-side state: they can only be
//! listed and forcibly terminated, never created or updated through this
//! API.

use std::collections::HashMap;

use crate::client::GuacamoleClient;
use crate::error::Result;
use crate::models::ActiveConnection;

impl GuacamoleClient {
    /// List all currently-active sessions, keyed by active-connection
    /// identifier. The map is empty when no sessions are open.
    pub async fn list_active_connections(&self) -> Result<HashMap<String, ActiveConnection>> {
        self.get_json(&self.data_path(&["activeConnections"]))
            .await
            .map_err(|e| e.context("list active connections"))
    }

    /// Forcibly terminate the active session with the given identifier.
    pub async fn kill_active_connection(&self, id: &str) -> Result<()> {
        self.delete(&self.data_path(&["activeConnections", id]))
            .await
            .map_err(|e| e.context(format!("kill active connection {id}")))
    }
}
