//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod common;
mod scan;
mod upload;

pub use scan::{ScanDisplay, ScanLogDisplay};
pub use upload::UploadDisplay;
