//! Generic pagination utilities.
//!
//! Provides page-number pagination over any ordered collection. Pages are
//! 1-indexed and there is always at least one page, even for an empty
//! collection. Out-of-range page requests are clamped, never rejected.

use serde::Serialize;
use std::num::NonZeroUsize;
use std::ops::Range;

/// Information about one page of a paginated collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Current page number (1-indexed, always within `1..=total_pages`).
    pub current_page: usize,
    /// Total number of pages (at least 1).
    pub total_pages: usize,
    /// Number of items across all pages.
    pub total_items: usize,
    /// Maximum number of items on one page.
    pub page_size: usize,
    /// Index of the first item on this page.
    pub start: usize,
    /// Index one past the last item on this page.
    pub end: usize,
    /// Whether a previous page exists.
    pub has_prev: bool,
    /// Whether a next page exists.
    pub has_next: bool,
}

impl PageInfo {
    /// Index range of the page's items within the full collection.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Number of pages needed for `total_items`, never less than one.
pub fn total_pages(total_items: usize, page_size: NonZeroUsize) -> usize {
    total_items.div_ceil(page_size.get()).max(1)
}

/// Clamp a requested page into `1..=total_pages`.
pub fn clamp_page(requested_page: usize, total_pages: usize) -> usize {
    requested_page.clamp(1, total_pages.max(1))
}

/// A borrowed page of items together with its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginated<'a, T> {
    pub info: PageInfo,
    pub items: &'a [T],
}

impl<'a, T> Paginated<'a, T> {
    pub fn total_pages(&self) -> usize {
        self.info.total_pages
    }

    /// The page actually served after clamping the request.
    pub fn clamped_page(&self) -> usize {
        self.info.current_page
    }
}

/// Slice out one page of `items`.
///
/// Pure: the same arguments always produce the same page.
pub fn paginate<T>(items: &[T], page_size: NonZeroUsize, requested_page: usize) -> Paginated<'_, T> {
    let mut page = Page::new(items.len(), page_size);
    page.request_page(requested_page);
    let info = page.info();
    Paginated {
        items: &items[info.range()],
        info,
    }
}

/// Manages pagination state for a collection whose size can change.
///
/// This is a pure data component that knows nothing about rendering or the
/// items themselves. Every mutation re-establishes
/// `1 <= current_page <= total_pages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    total_items: usize,
    page_size: NonZeroUsize,
    current_page: usize,
}

impl Page {
    /// Create a page positioned at page 1.
    pub fn new(total_items: usize, page_size: NonZeroUsize) -> Self {
        Self {
            total_items,
            page_size,
            current_page: 1,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Update the total item count, clamping the current page if necessary.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = clamp_page(self.current_page, self.total_pages());
    }

    /// Change the page size. The page number is kept and re-clamped; the
    /// items it shows are not preserved.
    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.page_size = page_size;
        self.current_page = clamp_page(self.current_page, self.total_pages());
    }

    /// Move to `requested_page`, clamped to the valid range.
    /// Returns the page actually selected.
    pub fn request_page(&mut self, requested_page: usize) -> usize {
        self.current_page = clamp_page(requested_page, self.total_pages());
        self.current_page
    }

    pub fn next_page(&mut self) -> usize {
        self.request_page(self.current_page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> usize {
        self.request_page(self.current_page.saturating_sub(1))
    }

    /// Jump back to the first page.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Get information about the current page.
    pub fn info(&self) -> PageInfo {
        let total_pages = self.total_pages();
        let size = self.page_size.get();
        let start = ((self.current_page - 1) * size).min(self.total_items);
        let end = (self.current_page * size).min(self.total_items);

        PageInfo {
            current_page: self.current_page,
            total_pages,
            total_items: self.total_items,
            page_size: size,
            start,
            end,
            has_prev: self.current_page > 1,
            has_next: self.current_page < total_pages,
        }
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}
