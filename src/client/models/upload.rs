//! Upload models

use serde::{Deserialize, Serialize};

/// Result of uploading an application binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    /// Analyzer chosen by the service for this artifact
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub analyzer: String,

    /// Upload status reported by the service
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub status: String,

    /// Scan hash, the key for every later operation on this artifact
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub hash: String,

    /// Artifact type (apk, ipa, zip, appx, ...)
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub scan_type: String,

    /// File name as recorded by the service
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub file_name: String,
}
