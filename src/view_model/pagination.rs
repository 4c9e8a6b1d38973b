use std::ops::{Range, RangeInclusive};


/// Number of pages needed for `len` items. Zero when there are no items.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Index range of `page` (1-based) within a list of `len` items. Pages past
/// the end yield an empty range.
pub fn page_bounds(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// The contiguous run of page-number buttons shown around the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationWindow {
    pub start: usize,
    pub end: usize,
}

impl PaginationWindow {
    /// Centers the window on `current_page` and keeps it full width whenever
    /// enough pages exist on either side.
    pub fn compute(current_page: usize, page_count: usize, max_visible_buttons: usize) -> Self {
        let max_visible = max_visible_buttons.max(1);

        let mut start = current_page.saturating_sub(max_visible / 2).max(1);
        let end = page_count.min(start.saturating_add(max_visible - 1));

        if end < start || end - start < max_visible - 1 {
            start = (end + 1).saturating_sub(max_visible).max(1);
        }

        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn pages(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Everything a renderer needs to draw pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: usize,
    pub page_count: usize,
    pub window_start: usize,
    pub window_end: usize,
    pub total_items: usize,
}

impl PageInfo {
    pub fn new(current_page: usize, total_items: usize, page_size: usize, max_visible_buttons: usize) -> Self {
        let page_count = page_count(total_items, page_size);
        let window = PaginationWindow::compute(current_page, page_count, max_visible_buttons);
        Self {
            current_page,
            page_count,
            window_start: window.start,
            window_end: window.end,
            total_items,
        }
    }

    pub fn window(&self) -> PaginationWindow {
        PaginationWindow {
            start: self.window_start,
            end: self.window_end,
        }
    }

    /// Whether a "previous" arrow is offered.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a "next" arrow is offered.
    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count
    }
}
