//! Paging for the scan listing endpoint

/// Which slice of the scan history `list_scans` should return.
///
/// The service numbers pages from 1. Unset fields stay off the query string
/// and the server falls back to its own page size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl PaginationParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(self, page: usize) -> Self {
        Self {
            page: Some(page),
            ..self
        }
    }

    pub fn page_size(self, page_size: usize) -> Self {
        Self {
            page_size: Some(page_size),
            ..self
        }
    }

    /// `page` / `page_size` pairs for the fields that are set, in that order
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        [("page", self.page), ("page_size", self.page_size)]
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v.to_string())))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.page_size.is_none()
    }
}
