//! Resource path construction.
//!
//! All resource endpoints live under `/api/session/data/<dataSource>/`,
//! where the data source segment comes from the authenticated session. The
//! fixed authentication endpoints live directly under `/api`.

use crate::endpoints::url_encoding::encode_path_segment;

/// Token exchange endpoint (form-encoded POST, no data source prefix).
pub const TOKENS_PATH: &str = "/api/tokens";

/// Session teardown endpoint (DELETE).
pub const SESSION_PATH: &str = "/api/session";

/// Build a resource path under `/api/session/data/<data_source>/`,
/// percent-encoding the data source and every segment independently so that
/// identifiers containing `/`, `@`, or spaces remain unambiguous.
///
/// # Examples
///
/// ```
/// use guacamole_client::endpoints::paths::data_path;
///
/// assert_eq!(
///     data_path("postgresql", &["users", "bob@example.com"]),
///     "/api/session/data/postgresql/users/bob%40example.com"
/// );
/// ```
pub fn data_path(data_source: &str, segments: &[&str]) -> String {
    let mut path = String::from("/api/session/data/");
    path.push_str(&encode_path_segment(data_source));
    for segment in segments {
        path.push('/');
        path.push_str(&encode_path_segment(segment));
    }
    path
}
