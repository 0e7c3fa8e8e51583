use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::UserRole;

/// A user record as served by the users endpoint, roles included.
/// `password` is the server-side hash and stays opaque; the timestamp
/// fields keep their wire form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub password: String,
    pub phone: String,
    pub email: String,
    pub enabled: u8,
    pub created: String,
    pub last_updated: String,
    pub roles: Vec<UserRole>,
}

impl User {
    /// Wire timestamps look like "2024-08-01 13:10:25.0". Reformat for
    /// display, falling back to the raw string when parsing fails.
    pub fn display_timestamp(raw: &str) -> String {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| raw.to_string())
    }

    /// Comma-separated role names for table cells.
    pub fn role_names(&self) -> String {
        self.roles
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
