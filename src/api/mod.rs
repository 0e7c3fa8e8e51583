// Atomic API modules
pub mod error;
pub mod permissions;
pub mod transport;

// Re-export commonly used items
pub use error::ApiError;
pub use permissions::{PermissionsClient, ROLES_LIST_ENDPOINT, SAVE_ENDPOINT, USERS_ENDPOINT};
pub use transport::{set_silent, HttpTransport, Transport};
