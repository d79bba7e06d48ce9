//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, override merging, and client initialization.

use log::{debug, warn};

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::ScanServiceClient;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Configuration with CLI/env overrides applied
    pub config: Config,
    /// Client for the configured scan server
    pub client: ScanServiceClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads the config file (a missing file is fine when `--server` and
    /// `--api-key` are given), applies overrides and builds the client.
    ///
    /// # Errors
    /// Returns error if the config cannot be parsed, the server or key is
    /// missing, or the server URL is invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Self::resolve_config(opts)?;
        let format = Self::resolve_format(opts, &config);

        let client = ScanServiceClient::new(config.client_config()?)?;
        debug!("Using scan server {}", client.base_url());

        Ok(Self {
            config,
            client,
            format,
        })
    }

    /// Load the config file and apply CLI/env overrides
    pub fn resolve_config(opts: &GlobalOptions) -> Result<Config> {
        let mut config = match Config::load_at(opts.config_ref()) {
            Ok(config) => config,
            Err(Error::Config(ConfigError::NotFound)) => {
                debug!("No config file, relying on flags and environment");
                Config::default()
            }
            Err(e) => return Err(e),
        };

        if let Some(ref server) = opts.server {
            config.server = Some(server.clone());
        }
        if let Some(ref api_key) = opts.api_key {
            config.api_key = Some(api_key.clone());
        }
        if let Some(timeout) = opts.timeout {
            config.preferences.timeout_secs = Some(timeout);
        }

        Ok(config)
    }

    /// Flag/env format wins, then the config preference, then table
    fn resolve_format(opts: &GlobalOptions, config: &Config) -> OutputFormat {
        if let Some(format) = opts.format {
            return format;
        }

        match config.preferences.format.as_deref() {
            Some(pref) => pref.parse().unwrap_or_else(|_| {
                warn!("Ignoring unknown format '{}' in config", pref);
                OutputFormat::default()
            }),
            None => OutputFormat::default(),
        }
    }
}
