//! Pagination
//!
//! Page math shared by every list view: 1-based pages, clamped page sizes and
//! a short window of page numbers for the pager.

use serde::Serialize;

/// Default page size
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Largest accepted page size
pub const MAX_PER_PAGE: u32 = 100;

/// Maximum number of page links shown by the pager
pub const PAGE_WINDOW: u32 = 5;

/// A validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Build a request, clamping `page` to at least 1 and `per_page` to `1..=MAX_PER_PAGE`.
    pub fn new(page: Option<u32>, per_page: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of a list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Current page after clamping (1-based)
    pub page: u32,
    pub per_page: u32,
    pub total: usize,
    pub total_pages: u32,
    /// Page numbers to render in the pager
    pub page_numbers: Vec<u32>,
}

/// Number of pages needed for `total` items; an empty list still has one page.
pub fn total_pages(total: usize, per_page: u32) -> u32 {
    let per_page = per_page.max(1) as usize;
    let pages = total.div_ceil(per_page).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Window of at most [`PAGE_WINDOW`] page numbers centred on `current`.
pub fn page_window(current: u32, total_pages: u32) -> Vec<u32> {
    let total_pages = total_pages.max(1);
    let current = current.clamp(1, total_pages);
    let width = PAGE_WINDOW.min(total_pages);

    let mut start = current.saturating_sub(PAGE_WINDOW / 2).max(1);
    let mut end = start + width - 1;
    if end > total_pages {
        end = total_pages;
        start = end + 1 - width;
    }

    (start..=end).collect()
}

/// Slice `items` into the requested page.
///
/// A page past the end is clamped to the last page.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len();
    let per_page = request.per_page();
    let total_pages = total_pages(total, per_page);
    let page = request.page().min(total_pages);

    let offset = (page as usize - 1) * per_page as usize;
    let items = items
        .into_iter()
        .skip(offset)
        .take(per_page as usize)
        .collect();

    Page {
        items,
        page,
        per_page,
        total,
        total_pages,
        page_numbers: page_window(page, total_pages),
    }
}
