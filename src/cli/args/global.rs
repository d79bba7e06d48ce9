//! Global CLI options shared across all commands
//!
//! Collects the global flags into one struct so handlers take a single
//! argument instead of threading each flag through.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format override (table, json)
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.staticscan/config.yaml)
    pub config: Option<String>,

    /// Scan server base URL override
    pub server: Option<String>,

    /// API key override
    pub api_key: Option<String>,

    /// Request timeout override in seconds
    pub timeout: Option<u64>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            server: cli.server.clone(),
            api_key: cli.api_key.clone(),
            timeout: cli.timeout,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get server override as `Option<&str>`.
    pub fn server_ref(&self) -> Option<&str> {
        self.server.as_deref()
    }
}
