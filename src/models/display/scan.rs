//! Scan display models

use serde::Serialize;
use tabled::Tabled;

use super::common::truncate_string;
use crate::client::{ScanContent, ScanLogEntry};
use crate::output::formatters::{format_timestamp, or_dash};

/// Scan log row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ScanLogDisplay {
    #[tabled(rename = "TIME")]
    pub timestamp: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    /// Exception text, "--" when the step succeeded
    #[tabled(rename = "ERROR")]
    #[serde(skip)]
    pub error: String,

    /// Raw exception for JSON output
    #[tabled(skip)]
    pub exception: Option<String>,
}

impl From<ScanLogEntry> for ScanLogDisplay {
    fn from(entry: ScanLogEntry) -> Self {
        Self {
            timestamp: format_timestamp(&entry.timestamp),
            status: entry.status,
            error: or_dash(entry.exception.as_deref()),
            exception: entry.exception,
        }
    }
}

/// Historical scan row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ScanDisplay {
    #[tabled(rename = "HASH")]
    pub hash: String,

    #[tabled(rename = "APP")]
    pub app: String,

    #[tabled(rename = "PACKAGE")]
    pub package: String,

    #[tabled(rename = "VERSION")]
    pub version: String,

    #[tabled(rename = "TYPE")]
    pub scan_type: String,

    #[tabled(rename = "FILE")]
    pub file_name: String,

    #[tabled(rename = "SCANNED")]
    pub scanned: String,

    /// Most recent log status
    #[tabled(rename = "LAST STEP")]
    pub last_step: String,
}

impl From<ScanContent> for ScanDisplay {
    fn from(scan: ScanContent) -> Self {
        let last_step = match scan.scan_logs.last() {
            Some(entry) if entry.exception.is_some() => format!("{} (failed)", entry.status),
            Some(entry) => entry.status.clone(),
            None => "--".to_string(),
        };

        Self {
            hash: scan.md5,
            app: or_dash(Some(scan.app_name.as_str())),
            package: or_dash(Some(scan.package_name.as_str())),
            version: or_dash(Some(scan.version_name.as_str())),
            scan_type: scan.scan_type,
            file_name: truncate_string(&scan.file_name, 32),
            scanned: format_timestamp(&scan.timestamp),
            last_step,
        }
    }
}
