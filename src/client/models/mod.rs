//! Scan service data models
//!
//! Plain value records decoded from service responses. Field names on the
//! wire are kept verbatim: upload, scan-log and delete payloads use lowercase
//! snake_case keys while historical scan records use uppercase keys.

use serde::{Deserialize, Deserializer};

mod scan;
mod upload;

pub use scan::{DeleteResult, ScanContent, ScanLogEntry, ScanLogsResult, ScansResult};
pub use upload::UploadResult;

/// Treat `null` like an absent key: the field gets its default value
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
