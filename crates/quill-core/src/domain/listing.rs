//! Listing criteria and paged results.

use std::str::FromStr;

use serde::Serialize;

/// Number of posts returned per listing page.
pub const PAGE_SIZE: u64 = 10;

/// Highest page whose offset still fits a signed 64-bit SQL parameter.
pub const MAX_PAGE: u64 = i64::MAX as u64 / PAGE_SIZE;

/// Columns a listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    CreatedAt,
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "createdAt" => Ok(Self::CreatedAt),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(()),
        }
    }
}

/// Validated listing criteria.
///
/// `page` is 1-based, in `1..=MAX_PAGE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter {
    pub page: u64,
    pub search_key: Option<String>,
    pub sort_by: Option<SortField>,
    pub sort_order: SortOrder,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            page: 1,
            search_key: None,
            sort_by: None,
            sort_order: SortOrder::Asc,
        }
    }
}

impl ListFilter {
    pub fn page(page: u64) -> Self {
        debug_assert!((1..=MAX_PAGE).contains(&page), "page out of range: {page}");
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, key: impl Into<String>) -> Self {
        self.search_key = Some(key.into());
        self
    }

    pub fn sorted_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_by = Some(field);
        self.sort_order = order;
        self
    }

    /// Rows to skip for the requested page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit())
    }

    pub fn limit(&self) -> u64 {
        PAGE_SIZE
    }
}

/// Paging metadata returned next to a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

impl Pagination {
    pub fn new(total: u64, current_page: u64, page_size: u64) -> Self {
        Self {
            total,
            total_pages: total.div_ceil(page_size),
            current_page,
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}
