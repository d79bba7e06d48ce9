//! Scan service API client

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod service;

#[cfg(test)]
pub use mock::MockScanClient;
pub use models::{
    DeleteResult, ScanContent, ScanLogEntry, ScanLogsResult, ScansResult, UploadResult,
};
pub use pagination::PaginationParams;
pub use service::{ClientConfig, ScanServiceClient};

/// Operations offered by the scanning service.
///
/// Every method is a single request/response exchange. Nothing is cached or
/// retried; failures are returned to the caller as they happen.
#[async_trait]
pub trait ScanServiceApi: Send + Sync {
    /// Upload an application binary and return its scan hash
    async fn upload_app(&self, path: &Path) -> Result<UploadResult>;

    /// Start a static scan of a previously uploaded binary.
    ///
    /// The body is returned unparsed; its format depends on the scan type.
    async fn trigger_scan(&self, hash: &str) -> Result<Vec<u8>>;

    /// Fetch the progress log of a running or finished scan
    async fn get_scan_logs(&self, hash: &str) -> Result<ScanLogsResult>;

    /// Fetch the JSON report of a finished scan as raw bytes
    async fn get_json_report(&self, hash: &str) -> Result<Vec<u8>>;

    /// Fetch the PDF report of a finished scan
    async fn get_pdf_report(&self, hash: &str) -> Result<Vec<u8>>;

    /// Delete a scan and its results from the service
    async fn delete_scan(&self, hash: &str) -> Result<DeleteResult>;

    /// List recent scans, one page at a time
    async fn list_scans(&self, pagination: Option<&PaginationParams>) -> Result<ScansResult>;
}
