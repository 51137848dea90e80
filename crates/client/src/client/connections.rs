//! Connection management API methods for [`GuacamoleClient`].
//!
//! # What this module handles:
//! - Connection CRUD
//! - The separate protocol-parameters read (parameters are never embedded in
//!   the base representation on read)
//! - Per-connection session history
//!
//! # What this module does NOT handle:
//! - Connection group topology (in [`crate::client::connection_groups`])
//! - Sharing profiles attached to connections (in
//!   [`crate::client::sharing_profiles`])

use std::collections::HashMap;

use crate::client::GuacamoleClient;
use crate::error::Result;
use crate::models::{Connection, HistoryEntry};

impl GuacamoleClient {
    /// List all connections visible to the authenticated user, keyed by
    /// connection identifier.
    pub async fn list_connections(&self) -> Result<HashMap<String, Connection>> {
        self.get_json(&self.data_path(&["connections"]))
            .await
            .map_err(|e| e.context("list connections"))
    }

    /// Create a new connection and return the created resource with its
    /// server-assigned identifier.
    pub async fn create_connection(&self, connection: &Connection) -> Result<Connection> {
        self.post_json(&self.data_path(&["connections"]), connection)
            .await
            .map_err(|e| e.context("create connection"))
    }

    /// Retrieve the connection with the given identifier.
    ///
    /// The returned connection carries no protocol parameters; call
    /// [`connection_parameters`](Self::connection_parameters) for those.
    pub async fn connection(&self, id: &str) -> Result<Connection> {
        self.get_json(&self.data_path(&["connections", id]))
            .await
            .map_err(|e| e.context(format!("get connection {id}")))
    }

    /// Fetch the protocol-specific parameters for a connection (hostname,
    /// port, credentials, ...).
    pub async fn connection_parameters(&self, id: &str) -> Result<HashMap<String, String>> {
        self.get_json(&self.data_path(&["connections", id, "parameters"]))
            .await
            .map_err(|e| e.context(format!("get connection parameters {id}")))
    }

    /// Replace the connection identified by `id` with the supplied value.
    /// The identifier inside `connection` is ignored; `id` wins.
    pub async fn update_connection(&self, id: &str, connection: &Connection) -> Result<()> {
        self.put_json(&self.data_path(&["connections", id]), connection)
            .await
            .map_err(|e| e.context(format!("update connection {id}")))
    }

    /// Permanently remove the connection with the given identifier.
    pub async fn delete_connection(&self, id: &str) -> Result<()> {
        self.delete(&self.data_path(&["connections", id]))
            .await
            .map_err(|e| e.context(format!("delete connection {id}")))
    }

    /// The session history of one connection, most recent first.
    pub async fn connection_history(&self, id: &str) -> Result<Vec<HistoryEntry>> {
        self.get_json(&self.data_path(&["connections", id, "history"]))
            .await
            .map_err(|e| e.context(format!("get connection history {id}")))
    }
}
