//! Page slicing.
//!
//! Everything here is pure: the same dataset and cursor always produce the
//! same page.

use std::ops::Range;

use super::error::TableResult;
use super::models::{PageCursor, PageState, Person};

/// A page-change request as emitted by a pagination control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageChange {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl PageChange {
    /// Advance by one page.
    pub fn next() -> Self {
        Self::default()
    }

    /// Switch page size and jump to `page`.
    pub fn resize(page: usize, page_size: usize) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    /// Cursor after applying this request to `cursor`.
    ///
    /// With a page size the request is adopted as-is (page defaults to 1);
    /// without one the page number advances by exactly one.
    pub fn apply(&self, cursor: PageCursor) -> TableResult<PageCursor> {
        match self.page_size {
            Some(size) => PageCursor::new(self.page.unwrap_or(1), size),
            None => cursor.with_page(cursor.page_number().saturating_add(1)),
        }
    }
}

/// Number of pages needed for `items` rows.
pub fn total_pages(items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    items.div_ceil(page_size)
}

/// Index range of the page `cursor` points at, clamped to `len`.
pub fn page_bounds(len: usize, cursor: PageCursor) -> Range<usize> {
    let start = (cursor.page_number() - 1)
        .saturating_mul(cursor.page_size())
        .min(len);
    let end = start.saturating_add(cursor.page_size()).min(len);
    start..end
}

/// Copy of the rows on the page `cursor` points at. Empty when out of range.
pub fn subset_of<T: Clone>(rows: &[T], cursor: PageCursor) -> Vec<T> {
    rows[page_bounds(rows.len(), cursor)].to_vec()
}

/// Build the page state for `full_dataset` at `cursor`.
pub fn compute_page(full_dataset: Vec<Person>, cursor: PageCursor) -> PageState {
    let total_items = full_dataset.len();
    let visible_rows = subset_of(&full_dataset, cursor);

    PageState {
        total_items,
        total_pages: total_pages(total_items, cursor.page_size()),
        visible_rows,
        full_dataset,
    }
}
