//! In-memory scan service client for testing
//!
//! Implements [`ScanServiceApi`] without network access so command handlers
//! can be tested against canned responses.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::fixtures::UploadResultBuilder;
use super::models::{
    DeleteResult, ScanContent, ScanLogEntry, ScanLogsResult, ScansResult, UploadResult,
};
use super::pagination::PaginationParams;
use super::ScanServiceApi;
use crate::error::{ApiError, Error, Result};

/// Scan service stand-in for handler tests.
///
/// Responses are set with the `with_*` builders; every call is counted and
/// recorded.
///
/// # Example
/// ```ignore
/// let mock = MockScanClient::new()
///     .with_logs(vec![log_entry("t", "Unzipping")])
///     .await;
///
/// let logs = mock.get_scan_logs("deadbeef").await?;
/// assert_eq!(logs.logs.len(), 1);
/// ```
#[derive(Default)]
pub struct MockScanClient {
    /// Result to return from upload_app (derived from the file name if unset)
    upload: Arc<Mutex<Option<UploadResult>>>,
    /// Raw body returned from trigger_scan
    scan_response: Arc<Mutex<Vec<u8>>>,
    /// Entries returned from get_scan_logs
    logs: Arc<Mutex<Vec<ScanLogEntry>>>,
    /// Raw body returned from get_json_report
    json_report: Arc<Mutex<Vec<u8>>>,
    /// Raw body returned from get_pdf_report
    pdf_report: Arc<Mutex<Vec<u8>>>,
    /// Scans returned from list_scans; delete_scan removes by md5
    scans: Arc<Mutex<Vec<ScanContent>>>,
    /// Failure for the next call only
    error: Arc<Mutex<Option<ApiError>>>,
    /// Per-operation call counters
    call_count: Arc<Mutex<CallCounts>>,
    /// Every call in order
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// How often each operation was invoked
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub upload_app: usize,
    pub trigger_scan: usize,
    pub get_scan_logs: usize,
    pub get_json_report: usize,
    pub get_pdf_report: usize,
    pub delete_scan: usize,
    pub list_scans: usize,
}

impl CallCounts {
    /// Calls across all operations
    pub fn total(&self) -> usize {
        self.upload_app
            + self.trigger_scan
            + self.get_scan_logs
            + self.get_json_report
            + self.get_pdf_report
            + self.delete_scan
            + self.list_scans
    }
}

/// One recorded call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    /// The API method called (e.g., "upload_app", "delete_scan")
    pub method: String,
    /// Scan hash for hash-keyed operations
    pub hash: Option<String>,
    /// File path for uploads
    pub path: Option<PathBuf>,
    /// Page requested from list_scans
    pub page: Option<usize>,
}

impl MockScanClient {
    /// Empty responses, no pending error
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the result returned from upload_app.
    pub async fn with_upload(self, result: UploadResult) -> Self {
        *self.upload.lock().await = Some(result);
        self
    }

    /// Configure the raw body returned from trigger_scan.
    pub async fn with_scan_response(self, body: impl Into<Vec<u8>>) -> Self {
        *self.scan_response.lock().await = body.into();
        self
    }

    /// Configure log entries returned from get_scan_logs.
    pub async fn with_logs(self, logs: Vec<ScanLogEntry>) -> Self {
        *self.logs.lock().await = logs;
        self
    }

    /// Configure the JSON report body.
    pub async fn with_json_report(self, body: impl Into<Vec<u8>>) -> Self {
        *self.json_report.lock().await = body.into();
        self
    }

    /// Configure the PDF report body.
    pub async fn with_pdf_report(self, body: impl Into<Vec<u8>>) -> Self {
        *self.pdf_report.lock().await = body.into();
        self
    }

    /// Configure scans returned from list_scans.
    pub async fn with_scans(self, scans: Vec<ScanContent>) -> Self {
        *self.scans.lock().await = scans;
        self
    }

    /// Fail the next call with `error`; later calls succeed again.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Snapshot of the counters
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Snapshot of the recorded calls
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Take the pending failure, if any
    async fn check_error(&self) -> Result<()> {
        match self.error.lock().await.take() {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    /// Record a hash-keyed request and bump its counter.
    async fn record(&self, method: &str, hash: Option<&str>, path: Option<&Path>, page: Option<usize>) {
        {
            let mut counts = self.call_count.lock().await;
            match method {
                "upload_app" => counts.upload_app += 1,
                "trigger_scan" => counts.trigger_scan += 1,
                "get_scan_logs" => counts.get_scan_logs += 1,
                "get_json_report" => counts.get_json_report += 1,
                "get_pdf_report" => counts.get_pdf_report += 1,
                "delete_scan" => counts.delete_scan += 1,
                "list_scans" => counts.list_scans += 1,
                _ => {}
            }
        }

        self.captured_requests.lock().await.push(CapturedRequest {
            method: method.to_string(),
            hash: hash.map(|h| h.to_string()),
            path: path.map(|p| p.to_path_buf()),
            page,
        });
    }
}

#[async_trait]
impl ScanServiceApi for MockScanClient {
    async fn upload_app(&self, path: &Path) -> Result<UploadResult> {
        self.record("upload_app", None, Some(path), None).await;

        // Mirror the real client: unreadable files fail before any exchange
        tokio::fs::metadata(path).await.map_err(|source| Error::File {
            path: path.to_path_buf(),
            source,
        })?;
        self.check_error().await?;

        if let Some(result) = self.upload.lock().await.clone() {
            return Ok(result);
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(UploadResultBuilder::new("mock-hash")
            .file_name(file_name)
            .build())
    }

    async fn trigger_scan(&self, hash: &str) -> Result<Vec<u8>> {
        self.record("trigger_scan", Some(hash), None, None).await;
        self.check_error().await?;
        Ok(self.scan_response.lock().await.clone())
    }

    async fn get_scan_logs(&self, hash: &str) -> Result<ScanLogsResult> {
        self.record("get_scan_logs", Some(hash), None, None).await;
        self.check_error().await?;
        Ok(ScanLogsResult {
            logs: self.logs.lock().await.clone(),
        })
    }

    async fn get_json_report(&self, hash: &str) -> Result<Vec<u8>> {
        self.record("get_json_report", Some(hash), None, None)
            .await;
        self.check_error().await?;
        Ok(self.json_report.lock().await.clone())
    }

    async fn get_pdf_report(&self, hash: &str) -> Result<Vec<u8>> {
        self.record("get_pdf_report", Some(hash), None, None).await;
        self.check_error().await?;
        Ok(self.pdf_report.lock().await.clone())
    }

    async fn delete_scan(&self, hash: &str) -> Result<DeleteResult> {
        self.record("delete_scan", Some(hash), None, None).await;
        self.check_error().await?;

        self.scans.lock().await.retain(|scan| scan.md5 != hash);
        Ok(DeleteResult {
            deleted: "yes".to_string(),
        })
    }

    async fn list_scans(&self, pagination: Option<&PaginationParams>) -> Result<ScansResult> {
        self.record("list_scans", None, None, pagination.and_then(|p| p.page))
            .await;
        self.check_error().await?;

        let scans = self.scans.lock().await.clone();
        let count = scans.len() as i64;
        Ok(ScansResult {
            content: scans,
            count,
            num_pages: if count == 0 { 0 } else { 1 },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{ScanContentBuilder, log_entry};
    use reqwest::StatusCode;

    #[tokio::test]
    async fn test_mock_counts_every_call() {
        let mock = MockScanClient::new();

        mock.trigger_scan("h").await.unwrap();
        mock.delete_scan("h").await.unwrap();
        mock.delete_scan("h").await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.trigger_scan, 1);
        assert_eq!(counts.delete_scan, 2);
        assert_eq!(counts.total(), 3);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let mock = MockScanClient::new()
            .with_error(ApiError::Remote {
                operation: "scan logs",
                status: StatusCode::NOT_FOUND,
            })
            .await
            .with_logs(vec![log_entry("t", "Unzipping")])
            .await;

        assert!(mock.get_scan_logs("h").await.is_err());
        let logs = mock.get_scan_logs("h").await.unwrap();
        assert_eq!(logs.logs.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_delete_removes_listed_scan() {
        let mock = MockScanClient::new()
            .with_scans(vec![
                ScanContentBuilder::new("keep").build(),
                ScanContentBuilder::new("drop").build(),
            ])
            .await;

        mock.delete_scan("drop").await.unwrap();
        let scans = mock.list_scans(None).await.unwrap();

        assert_eq!(scans.count, 1);
        assert_eq!(scans.content[0].md5, "keep");
    }

    #[tokio::test]
    async fn test_mock_upload_missing_file() {
        let mock = MockScanClient::new();
        let err = mock
            .upload_app(Path::new("/definitely/not/here.apk"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::File { .. }));
        assert_eq!(mock.call_counts().await.upload_app, 1);
    }
}
