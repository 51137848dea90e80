//! Data models for Guacamole API requests and responses.
//!
//! Types are organized by resource in submodules and re-exported here for
//! convenient access. All wire field names are camelCase; attribute maps use
//! the [`Attributes`] codec so `null` values decode to empty strings and the
//! field is always serialized as an object.

pub mod active_connections;
pub mod attributes;
pub mod auth;
pub mod connection_groups;
pub mod connections;
pub mod history;
pub mod identity;
pub mod permissions;
pub mod sharing_profiles;
pub mod user_groups;
pub mod users;

pub use active_connections::ActiveConnection;
pub use attributes::Attributes;
pub use auth::AuthResponse;
pub use connection_groups::{ConnectionGroup, ConnectionGroupType, ROOT_CONNECTION_GROUP};
pub use connections::Connection;
pub use history::{HistoryEntry, HistoryOrder};
pub use identity::CurrentUser;
pub use permissions::Permissions;
pub use sharing_profiles::SharingProfile;
pub use user_groups::UserGroup;
pub use users::User;
