//! staticscan - client for a mobile application static-scanning service
//!
//! The [`client`] module holds the HTTP client ([`client::ScanServiceClient`])
//! and the [`client::ScanServiceApi`] trait it implements. The remaining
//! modules back the `staticscan` command-line tool.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod output;

pub use error::{Error, Result};
