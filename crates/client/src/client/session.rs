//! Authentication and session teardown.
//!
//! # What this module handles:
//! - The token exchange (`POST /api/tokens`, form-encoded)
//! - Session invalidation (`DELETE /api/session`)
//! - Read access to the stored session fields
//!
//! # What this module does NOT handle:
//! - Token refresh or expiry tracking: there is none. A 401/403 on a later
//!   call is surfaced to the caller unchanged.

use tracing::debug;

use crate::auth::Session;
use crate::client::GuacamoleClient;
use crate::endpoints::{SESSION_PATH, TOKENS_PATH};
use crate::error::{ClientError, Result};
use crate::models::AuthResponse;

impl GuacamoleClient {
    /// Perform the Guacamole token exchange and store the resulting token
    /// and data source for use in subsequent calls. Must be called before
    /// any resource method.
    ///
    /// Calling this on a client that already holds a session overwrites the
    /// stored session state; the previous token is not invalidated
    /// server-side (call [`logout`](Self::logout) first if that matters).
    /// On failure the prior session state is left untouched.
    pub async fn authenticate(&mut self, username: &str, password: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, TOKENS_PATH);
        let form = [("username", username), ("password", password)];

        let response = self.http.post(&url).form(&form).send().await?;
        if !response.status().is_success() {
            let err = super::request::classify_error(response).await;
            return Err(err.context(format!("authenticate {username}")));
        }

        let auth: AuthResponse = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("decode auth response: {e}")))?;

        debug!(
            username = %auth.username,
            data_source = %auth.data_source,
            "authenticated"
        );
        self.session = Some(Session::new(auth.auth_token, auth.data_source));
        Ok(())
    }

    /// Invalidate the current session token (`DELETE /api/session`). The
    /// local session fields are not cleared; discard the client afterwards.
    pub async fn logout(&self) -> Result<()> {
        self.delete(SESSION_PATH)
            .await
            .map_err(|e| e.context("logout"))
    }

    /// The data source received during authentication (e.g. "postgresql"),
    /// used in every resource path. `None` before authentication.
    pub fn data_source(&self) -> Option<&str> {
        self.session.as_ref().map(Session::data_source)
    }

    /// The current authentication token. `None` before authentication.
    pub fn auth_token(&self) -> Option<&str> {
        self.session.as_ref().map(Session::token)
    }
}
