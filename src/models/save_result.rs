use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a save call. The server's response body is kept as-is
/// under the `successful` key; its shape is server-defined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveResult {
    pub successful: Value,
}
