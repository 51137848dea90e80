//! Current-identity API methods for [`GuacamoleClient`].
//!
//! The `/self` endpoints describe the authenticated identity itself and
//! need no path identifier; they are read-only.

use crate::client::GuacamoleClient;
use crate::error::Result;
use crate::models::{CurrentUser, Permissions};

impl GuacamoleClient {
    /// The profile of the currently-authenticated user. Useful for
    /// validating credentials and retrieving the authenticated username
    /// without knowing it in advance.
    pub async fn current_user(&self) -> Result<CurrentUser> {
        self.get_json(&self.data_path(&["self"]))
            .await
            .map_err(|e| e.context("get self"))
    }

    /// The explicit permissions held by the currently-authenticated user.
    /// Does not include permissions inherited via group membership.
    pub async fn current_user_permissions(&self) -> Result<Permissions> {
        self.get_json(&self.data_path(&["self", "permissions"]))
            .await
            .map_err(|e| e.context("get self permissions"))
    }

    /// The full resolved permission set for the currently-authenticated
    /// user, including permissions inherited from group memberships.
    pub async fn current_user_effective_permissions(&self) -> Result<Permissions> {
        self.get_json(&self.data_path(&["self", "effectivePermissions"]))
            .await
            .map_err(|e| e.context("get self effective permissions"))
    }
}
