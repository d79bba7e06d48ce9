//! Common CLI types shared across commands

use std::str::FromStr;

use clap::ValueEnum;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Table format - human-readable rows (default)
    #[default]
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}
