//! JSON rendering for `--format json`

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Envelope every JSON result is printed in
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// When and by which build the output was produced
    pub meta: Metadata,
}

/// Envelope metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// RFC 3339 time of rendering
    pub timestamp: String,

    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<T> {
    /// Wrap `data`, stamping the current time and crate version
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON inside the `{data, meta}` envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    let output = JsonOutput::new(data);
    serde_json::to_string_pretty(&output)
}

/// Pretty-print a raw body if it is JSON; `None` when it is not
pub fn pretty_raw(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    serde_json::to_string_pretty(&value).ok()
}
