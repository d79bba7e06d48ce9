//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod init;
pub mod report;
pub mod scan;
pub mod status;

pub use args::{GlobalOptions, OutputFormat, PaginationArgs};
pub use context::CommandContext;

/// staticscan - upload, scan and report on mobile apps with a static-scan server
#[derive(Parser, Debug)]
#[command(name = "staticscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "STATICSCAN_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "STATICSCAN_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Scan server base URL (e.g. http://127.0.0.1:8000)
    #[arg(long, global = true, env = "STATICSCAN_SERVER", hide_env = true)]
    pub server: Option<String>,

    /// API key sent in the Authorization header
    #[arg(
        long,
        global = true,
        env = "STATICSCAN_API_KEY",
        hide_env = true,
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// Request timeout in seconds (default: wait for the server)
    #[arg(
        long,
        global = true,
        env = "STATICSCAN_TIMEOUT",
        hide_env = true,
        value_name = "SECS"
    )]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, global = true, env = "STATICSCAN_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure the scan server and API key
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Upload an application binary (apk, ipa, zip, appx)
    Upload {
        /// Path to the binary
        file: PathBuf,

        /// Start a static scan right after the upload
        #[arg(long)]
        scan: bool,
    },

    /// Start a static scan of an uploaded binary
    Scan {
        /// Scan hash returned by `upload`
        hash: String,
    },

    /// Show the progress log of a scan
    Logs {
        /// Scan hash
        hash: String,
    },

    /// Download a scan report
    Report {
        /// Scan hash
        hash: String,

        /// Download the PDF report instead of JSON
        #[arg(long)]
        pdf: bool,

        /// Write to this file (PDF defaults to <HASH>.pdf, JSON to stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Delete a scan and its results from the server
    Delete {
        /// Scan hash
        hash: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List recent scans
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },
}
