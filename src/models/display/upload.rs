//! Upload display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::UploadResult;

/// Upload result row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UploadDisplay {
    /// Scan hash used by every follow-up command
    #[tabled(rename = "HASH")]
    pub hash: String,

    #[tabled(rename = "FILE")]
    pub file_name: String,

    #[tabled(rename = "TYPE")]
    pub scan_type: String,

    #[tabled(rename = "ANALYZER")]
    pub analyzer: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<UploadResult> for UploadDisplay {
    fn from(result: UploadResult) -> Self {
        Self {
            hash: result.hash,
            file_name: result.file_name,
            scan_type: result.scan_type,
            analyzer: result.analyzer,
            status: result.status,
        }
    }
}
