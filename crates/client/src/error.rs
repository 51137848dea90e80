//! Error types for the Guacamole client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Machine-readable error type for a missing resource (HTTP 404).
pub const ERROR_TYPE_NOT_FOUND: &str = "NOT_FOUND";

/// Machine-readable error type for an authorization failure (HTTP 403).
pub const ERROR_TYPE_PERMISSION_DENIED: &str = "PERMISSION_DENIED";

/// Errors that can occur during Guacamole client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection refused, timeout, TLS failure, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Structured error response from the Guacamole API.
    ///
    /// `error_type` carries the machine-readable category from the response
    /// body (e.g. `"NOT_FOUND"`); it is empty when the body was not a JSON
    /// error object, in which case `message` holds the raw body text.
    #[error("API error (HTTP {status}, type {error_type}): {message}")]
    Api {
        status: u16,
        error_type: String,
        message: String,
    },

    /// Invalid response format from the server.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// An error wrapped with operation context (operation name, target
    /// identifier). The underlying error remains reachable via `source()`.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ClientError>,
    },
}

impl ClientError {
    /// Wrap this error with operation context for logging, preserving the
    /// original error for programmatic inspection.
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The root error beneath any layers of added context.
    pub fn root(&self) -> &ClientError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// True when the error is an API error of type `"NOT_FOUND"`, however
    /// deeply it has been wrapped with context.
    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), Self::Api { error_type, .. } if error_type == ERROR_TYPE_NOT_FOUND)
    }

    /// True when the error is an API error of type `"PERMISSION_DENIED"`,
    /// however deeply it has been wrapped with context.
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self.root(),
            Self::Api { error_type, .. } if error_type == ERROR_TYPE_PERMISSION_DENIED
        )
    }

    /// The HTTP status of the API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self.root() {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Walk an arbitrary error chain looking for a [`ClientError`].
fn find_client_error<'a>(
    err: &'a (dyn std::error::Error + 'static),
) -> Option<&'a ClientError> {
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = current {
        if let Some(client_err) = e.downcast_ref::<ClientError>() {
            return Some(client_err);
        }
        current = e.source();
    }
    None
}

/// True when `err` (or any error in its `source()` chain) is a
/// [`ClientError::Api`] with type `"NOT_FOUND"`. Returns false for every
/// other error.
pub fn is_not_found(err: &(dyn std::error::Error + 'static)) -> bool {
    find_client_error(err).is_some_and(ClientError::is_not_found)
}

/// True when `err` (or any error in its `source()` chain) is a
/// [`ClientError::Api`] with type `"PERMISSION_DENIED"`.
pub fn is_permission_denied(err: &(dyn std::error::Error + 'static)) -> bool {
    find_client_error(err).is_some_and(ClientError::is_permission_denied)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> ClientError {
        ClientError::Api {
            status: 404,
            error_type: ERROR_TYPE_NOT_FOUND.to_string(),
            message: "No such connection".to_string(),
        }
    }

    #[test]
    fn test_is_not_found() {
        let err = not_found();
        assert!(err.is_not_found());
        assert!(!err.is_permission_denied());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_is_permission_denied() {
        let err = ClientError::Api {
            status: 403,
            error_type: ERROR_TYPE_PERMISSION_DENIED.to_string(),
            message: "Permission denied".to_string(),
        };
        assert!(err.is_permission_denied());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_predicates_false_for_other_errors() {
        let err = ClientError::InvalidUrl("not a url".to_string());
        assert!(!err.is_not_found());
        assert!(!err.is_permission_denied());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_predicates_survive_context_wrapping() {
        let err = not_found()
            .context("get connection 42")
            .context("sync topology");
        assert!(err.is_not_found());
        assert!(!err.is_permission_denied());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_context_display_prefixes_operation() {
        let err = not_found().context("get connection 42");
        let text = err.to_string();
        assert!(text.starts_with("get connection 42: "));
        assert!(text.contains("NOT_FOUND"));
    }

    #[test]
    fn test_free_functions_walk_foreign_chains() {
        #[derive(Debug)]
        struct Wrapper(ClientError);

        impl std::fmt::Display for Wrapper {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "wrapped: {}", self.0)
            }
        }

        impl std::error::Error for Wrapper {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                Some(&self.0)
            }
        }

        let wrapped = Wrapper(not_found().context("get connection 42"));
        assert!(is_not_found(&wrapped));
        assert!(!is_permission_denied(&wrapped));

        let other = std::io::Error::other("boom");
        assert!(!is_not_found(&other));
    }

    #[test]
    fn test_empty_error_type_matches_nothing() {
        let err = ClientError::Api {
            status: 500,
            error_type: String::new(),
            message: "Internal Error".to_string(),
        };
        assert!(!err.is_not_found());
        assert!(!err.is_permission_denied());
    }
}
