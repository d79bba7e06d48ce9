//! Pagination argument types for CLI commands

use clap::Args;

use crate::client::PaginationParams;

/// Pagination arguments for the scan list command.
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Page number (1-indexed)
    #[arg(long, short = 'p', value_parser = clap::value_parser!(u64).range(1..))]
    pub page: Option<u64>,

    /// Scans per page
    #[arg(long, short = 'n', value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,
}

impl PaginationArgs {
    /// Convert CLI args to API pagination params.
    pub fn to_params(&self) -> PaginationParams {
        let mut params = PaginationParams::new();

        if let Some(page) = self.page {
            params = params.page(page as usize);
        }
        if let Some(size) = self.page_size {
            params = params.page_size(size as usize);
        }

        params
    }
}
