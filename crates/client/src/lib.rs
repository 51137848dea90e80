//! Apache Guacamole REST API client.
//!
//! This crate provides a type-safe async client for the Guacamole
//! administrative REST API: connections, connection groups, users, user
//! groups, sharing profiles, active sessions, and connection history. It is
//! intended for infrastructure tooling (provisioning systems, Terraform-style
//! providers) that needs to manage Guacamole resources without hand-rolling
//! HTTP calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use guacamole_client::GuacamoleClient;
//!
//! let mut client = GuacamoleClient::builder()
//!     .base_url("http://localhost:8080/guacamole".to_string())
//!     .build()?;
//! client.authenticate("guacadmin", "guacadmin").await?;
//! let connections = client.list_connections().await?;
//! ```
//!
//! Every method is a single request/response round trip: the client holds no
//! cache, performs no retries, and runs no background work. Cancellation is
//! the usual async story — drop the future (e.g. via `tokio::time::timeout`)
//! and the in-flight request is aborted.

mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod patch;

pub mod endpoints;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::GuacamoleClient;
pub use client::builder::GuacamoleClientBuilder;
pub use error::{ClientError, Result, is_not_found, is_permission_denied};
pub use models::{
    ActiveConnection, Attributes, AuthResponse, Connection, ConnectionGroup, ConnectionGroupType,
    CurrentUser, HistoryEntry, HistoryOrder, Permissions, SharingProfile, User, UserGroup,
    ROOT_CONNECTION_GROUP,
};
pub use patch::{ObjectPermission, PatchOp, PatchOperation, SystemPermission};
