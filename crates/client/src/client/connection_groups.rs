//! Connection group API methods for [`GuacamoleClient`].

use std::collections::HashMap;

use crate::client::GuacamoleClient;
use crate::error::Result;
use crate::models::ConnectionGroup;

impl GuacamoleClient {
    /// List all connection groups visible to the authenticated user, keyed
    /// by identifier.
    pub async fn list_connection_groups(&self) -> Result<HashMap<String, ConnectionGroup>> {
        self.get_json(&self.data_path(&["connectionGroups"]))
            .await
            .map_err(|e| e.context("list connection groups"))
    }

    /// Retrieve the group hierarchy rooted at `root_id`, including all
    /// nested groups and their child connections in one call. Pass
    /// [`ROOT_CONNECTION_GROUP`](crate::models::ROOT_CONNECTION_GROUP) to
    /// fetch the complete topology.
    pub async fn connection_group_tree(&self, root_id: &str) -> Result<ConnectionGroup> {
        self.get_json(&self.data_path(&["connectionGroups", root_id, "tree"]))
            .await
            .map_err(|e| e.context(format!("get connection group tree {root_id}")))
    }

    /// Create a new connection group and return the created resource with
    /// its server-assigned identifier.
    pub async fn create_connection_group(&self, group: &ConnectionGroup) -> Result<ConnectionGroup> {
        self.post_json(&self.data_path(&["connectionGroups"]), group)
            .await
            .map_err(|e| e.context("create connection group"))
    }

    /// Retrieve the connection group with the given identifier.
    pub async fn connection_group(&self, id: &str) -> Result<ConnectionGroup> {
        self.get_json(&self.data_path(&["connectionGroups", id]))
            .await
            .map_err(|e| e.context(format!("get connection group {id}")))
    }

    /// Replace the connection group identified by `id` with the supplied
    /// value. The identifier inside `group` is ignored; `id` wins.
    pub async fn update_connection_group(&self, id: &str, group: &ConnectionGroup) -> Result<()> {
        self.put_json(&self.data_path(&["connectionGroups", id]), group)
            .await
            .map_err(|e| e.context(format!("update connection group {id}")))
    }

    /// Permanently remove the connection group with the given identifier.
    pub async fn delete_connection_group(&self, id: &str) -> Result<()> {
        self.delete(&self.data_path(&["connectionGroups", id]))
            .await
            .map_err(|e| e.context(format!("delete connection group {id}")))
    }
}
