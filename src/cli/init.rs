//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::client::{PaginationParams, ScanServiceApi, ScanServiceClient};
use crate::config::Config;
use crate::error::Result;

/// Server offered when nothing is configured yet
const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";

/// Run the init command
///
/// Values passed with `--server` / `--api-key` are used without prompting.
/// The credentials are checked with a one-item scan listing before saving.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to staticscan!".bold().green());
    println!("Let's connect to your scan server.\n");

    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();

    let server = match opts.server.clone() {
        Some(server) => server,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Scan server URL")
            .default(
                config
                    .server
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SERVER.to_string()),
            )
            .interact_text()?,
    };

    let api_key = match opts.api_key.clone() {
        Some(key) => key,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("API key")
            .interact()?,
    };

    config.server = Some(server);
    config.api_key = Some(api_key);
    if let Some(timeout) = opts.timeout {
        config.preferences.timeout_secs = Some(timeout);
    }

    println!("\n{}", "Verifying credentials...".cyan());
    let client = ScanServiceClient::new(config.client_config()?)?;
    let probe = PaginationParams::new().page(1).page_size(1);
    let scans = client.list_scans(Some(&probe)).await?;
    println!(
        "{} Connected to {} ({} scans on server)",
        "✓".green(),
        client.base_url(),
        scans.count
    );

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Upload and scan an app", "staticscan upload app.apk --scan".cyan());
    println!("  {} - List recent scans", "staticscan list".cyan());

    Ok(())
}
