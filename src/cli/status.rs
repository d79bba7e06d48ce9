//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "staticscan Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    match Config::load_at(opts.config_ref()) {
        Ok(_) => println!("Config file: {}", config_path.display().to_string().cyan()),
        Err(Error::Config(ConfigError::NotFound)) => {
            println!("{} Config file not found: {}", "○".dimmed(), config_path.display());
        }
        Err(e) => return Err(e),
    }

    let config = CommandContext::resolve_config(opts)?;
    println!();

    match config.server {
        Some(ref server) => {
            let source = if opts.server.is_some() { " (override)" } else { "" };
            println!("{} Scan server: {}{}", "✓".green(), server, source.dimmed());
        }
        None => {
            println!("{} Scan server not configured", "✗".red());
            println!("  → Run 'staticscan init' or pass --server");
        }
    }

    match config.api_key {
        Some(ref key) => println!("{} API key configured ({})", "✓".green(), mask_key(key)),
        None => {
            println!("{} API key not configured", "✗".red());
            println!("  → Run 'staticscan init' or pass --api-key");
        }
    }

    match config.preferences.timeout_secs {
        Some(secs) => println!("{} Request timeout: {}s", "○".dimmed(), secs),
        None => println!("{} Request timeout: none", "○".dimmed()),
    }

    println!();
    Ok(())
}

/// Show only the last four characters of a key
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
