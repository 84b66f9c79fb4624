use serde::{Deserialize, Serialize};

/// Log line emitted by the device
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogMessage {
    pub message: String,
    #[serde(default)]
    pub created_at: Option<u64>,
}
