//! URL path construction for the Guacamole REST API.

pub mod paths;
pub mod url_encoding;

pub use paths::{SESSION_PATH, TOKENS_PATH, data_path};
pub use url_encoding::encode_path_segment;
