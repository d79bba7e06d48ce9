//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use super::models::{ScanContent, ScanLogEntry, UploadResult};

// ============================================================================
// UploadResultBuilder
// ============================================================================

/// Builder for creating test UploadResult instances.
///
/// # Example
/// ```ignore
/// let upload = UploadResultBuilder::new("deadbeef")
///     .file_name("diva.apk")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct UploadResultBuilder {
    hash: String,
    analyzer: String,
    status: String,
    scan_type: String,
    file_name: String,
}

impl UploadResultBuilder {
    /// Create a new builder with the given scan hash.
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            analyzer: "static_analyzer".to_string(),
            status: "success".to_string(),
            scan_type: "apk".to_string(),
            file_name: "app.apk".to_string(),
        }
    }

    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = analyzer.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn scan_type(mut self, scan_type: impl Into<String>) -> Self {
        self.scan_type = scan_type.into();
        self
    }

    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Build the UploadResult.
    pub fn build(self) -> UploadResult {
        UploadResult {
            analyzer: self.analyzer,
            status: self.status,
            hash: self.hash,
            scan_type: self.scan_type,
            file_name: self.file_name,
        }
    }
}

// ============================================================================
// Scan log helpers
// ============================================================================

/// A successful log entry.
pub fn log_entry(timestamp: &str, status: &str) -> ScanLogEntry {
    ScanLogEntry {
        timestamp: timestamp.to_string(),
        status: status.to_string(),
        exception: None,
    }
}

/// A log entry that recorded an exception.
pub fn failed_log_entry(timestamp: &str, status: &str, exception: &str) -> ScanLogEntry {
    ScanLogEntry {
        exception: Some(exception.to_string()),
        ..log_entry(timestamp, status)
    }
}

// ============================================================================
// ScanContentBuilder
// ============================================================================

/// Builder for creating test ScanContent instances.
///
/// # Example
/// ```ignore
/// let scan = ScanContentBuilder::new("deadbeef")
///     .app_name("Diva")
///     .package_name("jakhar.aseem.diva")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ScanContentBuilder {
    md5: String,
    analyzer: String,
    scan_type: String,
    file_name: String,
    app_name: String,
    package_name: String,
    version_name: String,
    timestamp: String,
    scan_logs: Vec<ScanLogEntry>,
}

impl ScanContentBuilder {
    /// Create a new builder with the given MD5 / scan hash.
    pub fn new(md5: impl Into<String>) -> Self {
        let md5 = md5.into();
        Self {
            file_name: format!("{}.apk", &md5),
            md5,
            analyzer: "static_analyzer".to_string(),
            scan_type: "apk".to_string(),
            app_name: "Test App".to_string(),
            package_name: "com.example.test".to_string(),
            version_name: "1.0".to_string(),
            timestamp: "2024-05-01T10:00:00Z".to_string(),
            scan_logs: Vec::new(),
        }
    }

    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = name.into();
        self
    }

    pub fn version_name(mut self, version: impl Into<String>) -> Self {
        self.version_name = version.into();
        self
    }

    pub fn scan_type(mut self, scan_type: impl Into<String>) -> Self {
        self.scan_type = scan_type.into();
        self
    }

    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Append a log entry.
    pub fn log(mut self, entry: ScanLogEntry) -> Self {
        self.scan_logs.push(entry);
        self
    }

    /// Build the ScanContent.
    pub fn build(self) -> ScanContent {
        ScanContent {
            analyzer: self.analyzer,
            scan_type: self.scan_type,
            file_name: self.file_name,
            app_name: self.app_name,
            package_name: self.package_name,
            version_name: self.version_name,
            md5: self.md5,
            timestamp: self.timestamp,
            scan_logs: self.scan_logs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_builder_defaults() {
        let upload = UploadResultBuilder::new("h1").build();
        assert_eq!(upload.hash, "h1");
        assert_eq!(upload.scan_type, "apk");
    }

    #[test]
    fn test_scan_content_builder() {
        let scan = ScanContentBuilder::new("abc")
            .app_name("Diva")
            .log(failed_log_entry("t", "Decompiling", "boom"))
            .build();

        assert_eq!(scan.md5, "abc");
        assert_eq!(scan.file_name, "abc.apk");
        assert_eq!(scan.app_name, "Diva");
        assert_eq!(scan.scan_logs[0].exception.as_deref(), Some("boom"));
    }
}
