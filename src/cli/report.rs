//! Report download command

use std::io::Write;
use std::path::{Path, PathBuf};

use colored::Colorize;
use log::debug;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::ScanServiceApi;
use crate::error::Result;
use crate::output::formatters::format_bytes;
use crate::output::json::pretty_raw;

/// Which report to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Json,
    Pdf,
}

impl ReportKind {
    pub fn from_flag(pdf: bool) -> Self {
        if pdf { ReportKind::Pdf } else { ReportKind::Json }
    }

    /// Where the report goes when no `--output` is given; `None` means stdout
    pub fn default_output(self, hash: &str) -> Option<PathBuf> {
        match self {
            ReportKind::Json => None,
            ReportKind::Pdf => Some(PathBuf::from(format!("{}.pdf", hash))),
        }
    }
}

/// Run the report command
pub async fn run(opts: &GlobalOptions, hash: &str, pdf: bool, output: Option<&Path>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let kind = ReportKind::from_flag(pdf);

    let body = fetch_report(&ctx.client, hash, kind).await?;

    let target = output
        .map(Path::to_path_buf)
        .or_else(|| kind.default_output(hash));

    match target {
        Some(path) => {
            std::fs::write(&path, &body)?;
            eprintln!(
                "{} Saved {} report ({}) to {}",
                "✓".green(),
                if pdf { "PDF" } else { "JSON" },
                format_bytes(body.len()),
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            match pretty_raw(&body) {
                Some(pretty) => writeln!(stdout, "{}", pretty)?,
                None => stdout.write_all(&body)?,
            }
        }
    }

    Ok(())
}

/// Fetch a report's raw bytes
pub async fn fetch_report<C: ScanServiceApi + ?Sized>(
    client: &C,
    hash: &str,
    kind: ReportKind,
) -> Result<Vec<u8>> {
    let body = match kind {
        ReportKind::Json => client.get_json_report(hash).await?,
        ReportKind::Pdf => client.get_pdf_report(hash).await?,
    };
    debug!("Fetched {:?} report for {} ({} bytes)", kind, hash, body.len());
    Ok(body)
}
