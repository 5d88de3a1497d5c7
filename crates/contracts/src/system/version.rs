use serde::{Deserialize, Serialize};

/// Response of `GET /version`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
}
