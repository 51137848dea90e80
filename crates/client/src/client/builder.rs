//! Client builder for constructing [`GuacamoleClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the base URL and normalizing it (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`GuacamoleClient`] methods)
//! - Authentication (callers invoke
//!   [`authenticate`](GuacamoleClient::authenticate) after building)
//!
//! # Invariants
//! - `base_url` is required and must parse as an http/https URL
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP URLs log a warning

use std::time::Duration;

use url::Url;

use crate::client::GuacamoleClient;
use crate::error::{ClientError, Result};

/// Default overall request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for creating a new [`GuacamoleClient`].
///
/// All configuration options have sensible defaults except `base_url`,
/// which is required. The base URL is the Guacamole web-application root,
/// e.g. `http://localhost:8080/guacamole`; the `/api` prefix is appended by
/// the client.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use guacamole_client::GuacamoleClient;
///
/// let client = GuacamoleClient::builder()
///     .base_url("https://gateway.example.com/guacamole".to_string())
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub struct GuacamoleClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    skip_verify: bool,
    http_client: Option<reqwest::Client>,
}

impl Default for GuacamoleClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            skip_verify: false,
            http_client: None,
        }
    }
}

impl GuacamoleClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Guacamole server, including any servlet
    /// context path (e.g. `http://localhost:8080/guacamole`). Trailing
    /// slashes are removed automatically.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the overall request timeout.
    ///
    /// Default is 30 seconds. Ignored when a custom HTTP client is supplied
    /// via [`http_client`](Self::http_client).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle
    /// attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Supply a pre-configured `reqwest::Client`, bypassing the builder's
    /// own transport configuration (`timeout`, `skip_verify`). Useful for
    /// custom TLS setups, proxies, or transport-level instrumentation.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Normalize a base URL by removing trailing slashes, preventing double
    /// slashes when concatenating with endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`GuacamoleClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided or
    /// does not parse as an http/https URL. Returns [`ClientError::Http`] if
    /// the HTTP client fails to build.
    pub fn build(self) -> Result<GuacamoleClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let parsed = Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        let http = match self.http_client {
            Some(client) => client,
            None => {
                let mut http_builder = reqwest::Client::builder().timeout(self.timeout);

                if self.skip_verify {
                    if parsed.scheme() == "https" {
                        http_builder = http_builder.danger_accept_invalid_certs(true);
                    } else {
                        // skip_verify only affects TLS certificate verification;
                        // plain HTTP has no TLS layer.
                        tracing::warn!(
                            "skip_verify=true has no effect on HTTP URLs; TLS verification only applies to HTTPS connections"
                        );
                    }
                }

                http_builder.build()?
            }
        };

        Ok(GuacamoleClient {
            http,
            base_url,
            session: None,
        })
    }
}
