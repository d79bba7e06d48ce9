//! HTTP implementation of the scan service client

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::{
    DeleteResult, PaginationParams, ScanLogsResult, ScanServiceApi, ScansResult, UploadResult,
};
use crate::error::{ApiError, ConfigError, Error, Result};

const UPLOAD_PATH: &str = "/api/v1/upload";
const SCAN_PATH: &str = "/api/v1/scan";
const SCAN_LOGS_PATH: &str = "/api/v1/scan_logs";
const REPORT_JSON_PATH: &str = "/api/v1/report_json";
const REPORT_PDF_PATH: &str = "/api/v1/download_pdf";
const DELETE_SCAN_PATH: &str = "/api/v1/delete_scan";
const SCANS_PATH: &str = "/api/v1/scans";

/// Connection parameters for a scan service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server root, e.g. `http://127.0.0.1:8000`
    pub base_url: String,

    /// Sent verbatim as the `Authorization` header
    pub auth_token: String,

    /// Whole-request timeout; `None` waits as long as the server takes
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: auth_token.into(),
            timeout: None,
        }
    }

    /// Set a request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Scan service API client
#[derive(Debug, Clone)]
pub struct ScanServiceClient {
    http: HttpClient,
    base_url: String,
    auth_token: String,
}

impl ScanServiceClient {
    /// Create a client for the given server.
    ///
    /// Fails with a configuration error when the base URL is not an absolute
    /// http(s) URL.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        // Anything but 200 is a failure, redirects included
        let mut builder = HttpClient::builder().redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ConfigError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            auth_token: config.auth_token,
        })
    }

    /// Base URL requests are sent to, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a request carrying the auth header
    fn authorized(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.http
            .request(method, url)
            .header(AUTHORIZATION, &self.auth_token)
    }

    /// Send a request, keeping the response only if the service answered 200.
    ///
    /// The body of a failed response is never read.
    async fn send(&self, request: RequestBuilder, operation: &'static str) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        debug!("{} returned {}", operation, status);

        if status != StatusCode::OK {
            return Err(ApiError::Remote { operation, status }.into());
        }
        Ok(response)
    }

    /// Form-encoded `hash=<hash>` POST returning the raw body
    async fn post_hash(&self, path: &str, hash: &str, operation: &'static str) -> Result<Vec<u8>> {
        require_hash(hash)?;

        let request = self
            .authorized(Method::POST, path)
            .form(&[("hash", hash)]);
        let response = self.send(request, operation).await?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }

    /// Form-encoded `hash=<hash>` POST decoding a JSON body
    async fn post_hash_json<T: DeserializeOwned>(
        &self,
        path: &str,
        hash: &str,
        operation: &'static str,
    ) -> Result<T> {
        let body = self.post_hash(path, hash, operation).await?;
        decode(&body)
    }
}

#[async_trait]
impl ScanServiceApi for ScanServiceClient {
    async fn upload_app(&self, path: &Path) -> Result<UploadResult> {
        let contents = tokio::fs::read(path).await.map_err(|source| Error::File {
            path: path.to_path_buf(),
            source,
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ConfigError::InvalidRequest(format!("{} does not name a file", path.display()))
            })?;

        debug!("Uploading {} ({} bytes)", file_name, contents.len());

        let part = Part::bytes(contents)
            .file_name(file_name)
            .mime_str("application/octet-stream")?;
        let form = Form::new().part("file", part);

        let request = self.authorized(Method::POST, UPLOAD_PATH).multipart(form);
        let response = self.send(request, "upload").await?;
        let body = response.bytes().await?;
        decode(&body)
    }

    async fn trigger_scan(&self, hash: &str) -> Result<Vec<u8>> {
        self.post_hash(SCAN_PATH, hash, "scan trigger").await
    }

    async fn get_scan_logs(&self, hash: &str) -> Result<ScanLogsResult> {
        self.post_hash_json(SCAN_LOGS_PATH, hash, "scan logs").await
    }

    async fn get_json_report(&self, hash: &str) -> Result<Vec<u8>> {
        self.post_hash(REPORT_JSON_PATH, hash, "JSON report").await
    }

    async fn get_pdf_report(&self, hash: &str) -> Result<Vec<u8>> {
        self.post_hash(REPORT_PDF_PATH, hash, "PDF report").await
    }

    async fn delete_scan(&self, hash: &str) -> Result<DeleteResult> {
        self.post_hash_json(DELETE_SCAN_PATH, hash, "delete scan")
            .await
    }

    async fn list_scans(&self, pagination: Option<&PaginationParams>) -> Result<ScansResult> {
        let mut request = self.authorized(Method::GET, SCANS_PATH);
        if let Some(params) = pagination.filter(|p| !p.is_empty()) {
            request = request.query(&params.to_query_params());
        }

        let response = self.send(request, "scan list").await?;
        let body = response.bytes().await?;
        decode(&body)
    }
}

/// Validate the server URL and strip a trailing slash
fn normalize_base_url(raw: &str) -> Result<String> {
    let invalid = |reason: String| ConfigError::InvalidServerUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{}'", other)).into()),
    }
    if url.query().is_some() {
        return Err(invalid("query strings are not allowed".to_string()).into());
    }

    Ok(raw.trim_end_matches('/').to_string())
}

fn require_hash(hash: &str) -> Result<()> {
    if hash.is_empty() {
        return Err(ConfigError::InvalidRequest("scan hash must not be empty".to_string()).into());
    }
    Ok(())
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
    })
}
