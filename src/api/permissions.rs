use std::sync::Arc;

use serde_json::Value;

use super::error::ApiError;
use super::transport::Transport;
use crate::models::{SaveResult, UserRole};

/// Endpoint serving the role catalog.
pub const ROLES_LIST_ENDPOINT: &str = "/api/permissions/user-roles-list";
/// Endpoint serving all users with their role assignments.
pub const USERS_ENDPOINT: &str = "/api/permissions/users";
/// Endpoint accepting role assignment saves.
pub const SAVE_ENDPOINT: &str = "/api/permissions";

/// Client for the permissions API.
///
/// Holds no state besides the injected transport: no cache, no in-flight
/// bookkeeping. Every call issues exactly one request, and concurrent
/// calls are fully independent of each other.
pub struct PermissionsClient {
    transport: Arc<dyn Transport>,
}

impl PermissionsClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch the roles known to the server, in server order.
    pub async fn get_list_of_roles(&self) -> Result<Vec<UserRole>, ApiError> {
        let body = self
            .transport
            .execute("GET", ROLES_LIST_ENDPOINT, None)
            .await?;
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Fetch all users with their role assignments.
    ///
    /// The response body is returned exactly as served, with no shape
    /// validation: the backend has been observed answering `{}` instead
    /// of a list, and that body reaches the caller unchanged. Deserialize
    /// into `Vec<User>` when a typed view is wanted.
    pub async fn get_list_of_all_users(&self) -> Result<Value, ApiError> {
        self.transport.execute("GET", USERS_ENDPOINT, None).await
    }

    /// Post a set of role assignments.
    ///
    /// Entries are sent exactly as given, duplicates included; nothing is
    /// validated or deduplicated here. The server's response body is
    /// wrapped unmodified under `successful`.
    pub async fn save(&self, roles: &[UserRole]) -> Result<SaveResult, ApiError> {
        let payload = serde_json::to_value(roles).map_err(|e| ApiError::Decode(e.to_string()))?;
        let body = self
            .transport
            .execute("POST", SAVE_ENDPOINT, Some(payload))
            .await?;
        Ok(SaveResult { successful: body })
    }
}
