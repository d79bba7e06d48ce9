//! Scan models

use serde::{Deserialize, Serialize};

/// One progress entry from a scan's log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanLogEntry {
    /// When the entry was recorded (service-formatted)
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub timestamp: String,

    /// Progress message
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub status: String,

    /// Error recorded at this point, `None` when the step succeeded
    #[serde(default)]
    pub exception: Option<String>,
}

/// Scan progress log, in chronological order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanLogsResult {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub logs: Vec<ScanLogEntry>,
}

/// Historical scan record from the scan listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ScanContent {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub analyzer: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub scan_type: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub file_name: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub app_name: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub package_name: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub version_name: String,

    /// MD5 of the artifact; the same value as the upload hash
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub md5: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub timestamp: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub scan_logs: Vec<ScanLogEntry>,
}

/// One page of the scan listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScansResult {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub content: Vec<ScanContent>,

    /// Total number of scans on the server
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub count: i64,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub num_pages: i64,
}

/// Confirmation returned by the service after deleting a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub deleted: String,
}
