//! Pagination request and result types.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Zero-based page index and page size.
///
/// The size is clamped to `1..=MAX_PAGE_SIZE` on construction, and the page index so that
/// the row offset `page * size` stays within `i64`. Pages past the last one are empty.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(from = "PageParams")]
pub struct PageRequest {
    page: u64,
    size: u64,
}

/// Unchecked page parameters as received from a caller.
#[derive(Deserialize)]
struct PageParams {
    #[serde(default)]
    page: u64,
    #[serde(default = "default_page_size")]
    size: u64,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        Self::new(params.page, params.size)
    }
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        let size = size.clamp(1, MAX_PAGE_SIZE);

        Self {
            page: page.min(i64::MAX as u64 / size),
            size,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        Self {
            items,
            page: request.page(),
            size: request.size(),
            total_items,
            total_pages: total_items.div_ceil(request.size()),
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}
