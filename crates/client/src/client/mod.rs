//! Main Guacamole REST API client and API methods.
//!
//! This module provides the primary [`GuacamoleClient`] for interacting with
//! the Guacamole administrative REST API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `request`: The shared request pipeline (private module)
//! - `session`: Authentication and session teardown
//! - `connections`, `connection_groups`, `users`, `user_groups`,
//!   `sharing_profiles`, `active_connections`, `history`, `identity`:
//!   per-resource API methods
//!
//! # What this module does NOT handle:
//! - URL path construction (delegated to [`crate::endpoints`])
//! - Patch descriptor construction (see [`crate::patch`])
//!
//! # Invariants
//! - [`authenticate`](GuacamoleClient::authenticate) must be called before
//!   any resource method; resource methods never authenticate implicitly and
//!   never retry on 401/403
//! - Resource methods take `&self`; only `authenticate` mutates session
//!   state, so the borrow checker rules out re-authentication racing other
//!   calls on the same client

pub mod builder;
mod request;
mod session;

// API method submodules
mod active_connections;
mod connection_groups;
mod connections;
mod history;
mod identity;
mod sharing_profiles;
mod user_groups;
mod users;

use crate::auth::Session;
use crate::endpoints;

/// Guacamole REST API client.
///
/// # Creating a client
///
/// Use [`GuacamoleClient::builder()`]:
///
/// ```rust,ignore
/// use guacamole_client::GuacamoleClient;
///
/// let mut client = GuacamoleClient::builder()
///     .base_url("http://localhost:8080/guacamole".to_string())
///     .build()?;
/// client.authenticate("guacadmin", "guacadmin").await?;
/// ```
///
/// # Session lifecycle
///
/// [`authenticate`](Self::authenticate) performs the token exchange and
/// stores the resulting token and data source on the client. Every
/// subsequent request carries the token in the `Guacamole-Token` header.
/// There is no automatic refresh: a 401/403 on a later call is surfaced to
/// the caller unchanged.
#[derive(Debug)]
pub struct GuacamoleClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) session: Option<Session>,
}

impl GuacamoleClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GuacamoleClientBuilder {
        builder::GuacamoleClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a resource path under the session's data source, percent
    /// encoding every segment. An unauthenticated client has no data source,
    /// which yields an empty data-source segment; the server rejects such
    /// requests, which is the documented behavior for calling resource
    /// methods before [`authenticate`](Self::authenticate).
    pub(crate) fn data_path(&self, segments: &[&str]) -> String {
        let data_source = self.session.as_ref().map_or("", Session::data_source);
        endpoints::data_path(data_source, segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[test]
    fn test_builder_normalizes_base_url() {
        let client = GuacamoleClient::builder()
            .base_url("http://localhost:8080/guacamole/".to_string())
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/guacamole");
    }

    #[test]
    fn test_builder_missing_base_url() {
        let client = GuacamoleClient::builder().build();
        assert!(matches!(client.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_data_path_before_authentication_has_empty_data_source() {
        let client = GuacamoleClient::builder()
            .base_url("http://localhost:8080/guacamole".to_string())
            .build()
            .unwrap();
        assert_eq!(client.data_path(&["users"]), "/api/session/data//users");
    }
}
