//! Configuration management for staticscan

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::ClientConfig;
use crate::error::{ConfigError, Result};

/// Connection settings and preferences for the CLI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Scan server base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,

    /// API key, sent verbatim in the Authorization header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Request timeout in seconds; unset waits for the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// `~/.staticscan/config.yaml`
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".staticscan").join("config.yaml"))
    }

    /// Resolve an optional override to the path actually used
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional override path
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load from an explicit path; a missing file is `ConfigError::NotFound`
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an optional override path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Write to an explicit path, creating parent directories
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The file holds an API key
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Validate that server and key are present
    pub fn validate_auth(&self) -> Result<()> {
        if self.server.is_none() {
            return Err(ConfigError::MissingServer.into());
        }
        if self.api_key.is_none() {
            return Err(ConfigError::MissingApiKey.into());
        }
        Ok(())
    }

    /// Build client connection parameters from this configuration
    pub fn client_config(&self) -> Result<ClientConfig> {
        self.validate_auth()?;

        let server = self.server.clone().ok_or(ConfigError::MissingServer)?;
        let api_key = self.api_key.clone().ok_or(ConfigError::MissingApiKey)?;

        let mut client_config = ClientConfig::new(server, api_key);
        if let Some(secs) = self.preferences.timeout_secs {
            client_config = client_config.timeout(Duration::from_secs(secs));
        }
        Ok(client_config)
    }
}
