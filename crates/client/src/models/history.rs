//! Connection history models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A recorded connection session or login event. The history log is
/// append-only server-side and read-only to this client.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub identifier: String,
    #[serde(default)]
    pub uuid: String,
    pub username: String,
    #[serde(default)]
    pub remote_host: String,
    /// Session start time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub start_date: i64,
    /// Session end time in milliseconds since the Unix epoch; zero while the
    /// session is still active.
    #[serde(default)]
    pub end_date: i64,
    #[serde(default)]
    pub active: bool,
}

/// Ordering of the global history list by session start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOrder {
    StartDateAscending,
    StartDateDescending,
}

impl HistoryOrder {
    /// The value of the `order` query parameter for this ordering.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Self::StartDateAscending => "startDate",
            Self::StartDateDescending => "-startDate",
        }
    }
}

impl fmt::Display for HistoryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}
