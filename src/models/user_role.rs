use serde::{Deserialize, Serialize};

/// A role entry as served by the permissions API.
/// The same shape doubles as a catalog entry (the role list) and as an
/// assignment entry in save payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    pub id: i64,
    pub name: String,
}
