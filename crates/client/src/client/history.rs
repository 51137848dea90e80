//! Connection history API methods for [`GuacamoleClient`].
//!
//! The history log is append-only server-side and read-only here. Scoped
//! variants live with their owning resource:
//! [`connection_history`](GuacamoleClient::connection_history) and
//! [`user_history`](GuacamoleClient::user_history).

use crate::client::GuacamoleClient;
use crate::error::Result;
use crate::models::{HistoryEntry, HistoryOrder};

impl GuacamoleClient {
    /// The global history of all connection sessions, optionally ordered by
    /// start date. Pass `None` for the server's default ordering.
    pub async fn connection_history_log(
        &self,
        order: Option<HistoryOrder>,
    ) -> Result<Vec<HistoryEntry>> {
        let mut path = self.data_path(&["history", "connections"]);
        if let Some(order) = order {
            path.push_str("?order=");
            path.push_str(order.as_query_value());
        }
        self.get_json(&path)
            .await
            .map_err(|e| e.context("list connection history"))
    }
}
