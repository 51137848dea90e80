//! Session state produced by the authentication token exchange.

use secrecy::{ExposeSecret, SecretString};

/// Authenticated session state: the auth token returned by
/// `POST /api/tokens` and the data source it is scoped to.
///
/// Held by the client for its lifetime. There is no expiry tracking — the
/// server rejects calls made with a stale token and that rejection is
/// surfaced to the caller as-is.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    auth_token: SecretString,
    data_source: String,
}

impl Session {
    pub(crate) fn new(auth_token: String, data_source: String) -> Self {
        Self {
            auth_token: SecretString::new(auth_token.into()),
            data_source,
        }
    }

    /// The raw token value, for attaching to the `Guacamole-Token` header.
    pub(crate) fn token(&self) -> &str {
        self.auth_token.expose_secret()
    }

    pub(crate) fn data_source(&self) -> &str {
        &self.data_source
    }
}
