//! Scan lifecycle commands: upload, scan, logs, delete, list

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use log::debug;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat, PaginationArgs};
use crate::client::{DeleteResult, ScanServiceApi, UploadResult};
use crate::error::Result;
use crate::models::{ScanDisplay, ScanLogDisplay, UploadDisplay};
use crate::output::Formattable;

/// Run the upload command
pub async fn upload(opts: &GlobalOptions, file: &Path, and_scan: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    eprintln!("{} {}", "Uploading".cyan(), file.display());
    let result = upload_with(&ctx.client, file, and_scan).await?;
    vec![UploadDisplay::from(result)].print(ctx.format)?;

    Ok(())
}

/// Upload a binary, optionally starting its scan.
///
/// The scan response is not printed; its body is the full analysis and is
/// available later through `report`.
pub async fn upload_with<C: ScanServiceApi + ?Sized>(
    client: &C,
    file: &Path,
    and_scan: bool,
) -> Result<UploadResult> {
    let result = client.upload_app(file).await?;
    debug!("Uploaded {} as {}", result.file_name, result.hash);

    if and_scan {
        eprintln!("{} {}", "Scanning".cyan(), result.hash);
        let body = client.trigger_scan(&result.hash).await?;
        debug!(
            "Scan response for {} ({} bytes): {}",
            result.hash,
            body.len(),
            String::from_utf8_lossy(&body)
        );
        eprintln!(
            "{} Scan finished for {} (run `staticscan report {}` for results)",
            "✓".green(),
            result.hash,
            result.hash
        );
    }

    Ok(result)
}

/// Run the scan command, writing the raw service response to stdout
pub async fn trigger(opts: &GlobalOptions, hash: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    eprintln!("{} {}", "Scanning".cyan(), hash);
    let body = ctx.client.trigger_scan(hash).await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&body)?;
    if !body.ends_with(b"\n") {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

/// Run the logs command
pub async fn logs(opts: &GlobalOptions, hash: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let output = logs_with(&ctx.client, hash, ctx.format).await?;
    println!("{}", output);
    Ok(())
}

/// Fetch and render a scan's progress log
pub async fn logs_with<C: ScanServiceApi + ?Sized>(
    client: &C,
    hash: &str,
    format: OutputFormat,
) -> Result<String> {
    let result = client.get_scan_logs(hash).await?;
    debug!("Fetched {} log entries for {}", result.logs.len(), hash);

    let rows: Vec<ScanLogDisplay> = result.logs.into_iter().map(ScanLogDisplay::from).collect();
    rows.format(format)
}

/// Run the delete command
pub async fn delete(opts: &GlobalOptions, hash: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete scan {} and all its results?", hash))
            .default(false)
            .interact()?;
        if !confirmed {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let result = delete_with(&ctx.client, hash).await?;
    match ctx.format {
        OutputFormat::Json => println!("{}", crate::output::json::format_json(&result)?),
        OutputFormat::Table => println!(
            "{} Deleted scan {} ({})",
            "✓".green(),
            hash,
            result.deleted
        ),
    }

    Ok(())
}

/// Delete a scan
pub async fn delete_with<C: ScanServiceApi + ?Sized>(
    client: &C,
    hash: &str,
) -> Result<DeleteResult> {
    let result = client.delete_scan(hash).await?;
    debug!("Delete of {} answered '{}'", hash, result.deleted);
    Ok(result)
}

/// Run the list command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let output = list_with(&ctx.client, pagination, ctx.format).await?;
    println!("{}", output);
    Ok(())
}

/// Fetch and render one page of the scan listing
pub async fn list_with<C: ScanServiceApi + ?Sized>(
    client: &C,
    pagination: &PaginationArgs,
    format: OutputFormat,
) -> Result<String> {
    let params = pagination.to_params();
    let result = client.list_scans(Some(&params)).await?;
    debug!(
        "Fetched {} of {} scans ({} pages)",
        result.content.len(),
        result.count,
        result.num_pages
    );

    let count = result.count;
    let num_pages = result.num_pages;
    let rows: Vec<ScanDisplay> = result.content.into_iter().map(ScanDisplay::from).collect();
    let mut output = rows.format(format)?;

    if format == OutputFormat::Table && num_pages > 1 {
        let page = pagination.page.unwrap_or(1);
        output.push_str(&format!(
            "\nPage {} of {} ({} scans). Use --page to see more.",
            page, num_pages, count
        ));
    }

    Ok(output)
}
