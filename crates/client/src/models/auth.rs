//! Authentication models.

use serde::Deserialize;

/// Response body of the token exchange (`POST /api/tokens`).
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// The session token to attach to subsequent requests.
    pub auth_token: String,
    /// The username the token was issued for.
    pub username: String,
    /// The data source the session is bound to (e.g. "postgresql").
    pub data_source: String,
    /// All data sources configured on the server.
    #[serde(default)]
    pub available_data_sources: Vec<String>,
}
