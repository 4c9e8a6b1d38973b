//! Client-side list view model: filter, sort and paginate an announcement
//! list kept in memory for one page.
//!
//! Search and sort override each other rather than compose. A new search
//! always starts from the original order, and switching back to the default
//! order drops the active search.

pub mod pagination;
pub mod policy;

use crate::domain::{AnnouncementItem, SortMode};

pub use pagination::{page_bounds, page_count, PageInfo, PaginationWindow};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_MAX_VISIBLE_BUTTONS: usize = 3;

#[derive(Debug, Clone)]
pub struct ListViewModel {
    all_items: Vec<AnnouncementItem>,
    active_items: Vec<AnnouncementItem>,
    current_page: usize,
    page_size: usize,
    search_query: String,
    sort_mode: SortMode,
}

impl Default for ListViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ListViewModel {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// A page size of zero is treated as one.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            all_items: Vec::new(),
            active_items: Vec::new(),
            current_page: 1,
            page_size: page_size.max(1),
            search_query: String::new(),
            sort_mode: SortMode::Default,
        }
    }

    /// Replaces everything from a previous load. Supplied order is the
    /// "default" order.
    pub fn set_items(&mut self, items: &[AnnouncementItem]) {
        self.all_items = items.to_vec();
        self.active_items = self.all_items.clone();
        self.search_query.clear();
        self.sort_mode = SortMode::Default;
        self.current_page = 1;
        tracing::debug!("View model loaded {} items", self.all_items.len());
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
        self.active_items = policy::filter_items(&self.all_items, query);
        self.sort_mode = SortMode::Default;
        self.current_page = 1;
        tracing::debug!(
            "Search {:?} matched {} of {} items",
            query,
            self.active_items.len(),
            self.all_items.len()
        );
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        match mode {
            SortMode::Default => {
                self.active_items = self.all_items.clone();
                self.search_query.clear();
            }
            SortMode::Nearest | SortMode::Farthest => {
                policy::sort_items(&mut self.active_items, mode);
            }
        }
        self.sort_mode = mode;
        self.current_page = 1;
        tracing::debug!("Sort mode set to {}", mode);
    }

    /// Accepts any page number; pages past the end render empty. Page 0 is
    /// treated as page 1.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.page_count() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn previous_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page = (self.current_page - 1).min(self.page_count().max(1));
            true
        } else {
            false
        }
    }

    pub fn visible_slice(&self) -> &[AnnouncementItem] {
        &self.active_items[page_bounds(self.current_page, self.page_size, self.active_items.len())]
    }

    pub fn page_count(&self) -> usize {
        page_count(self.active_items.len(), self.page_size)
    }

    pub fn pagination_window(&self, max_visible_buttons: usize) -> PaginationWindow {
        PaginationWindow::compute(self.current_page, self.page_count(), max_visible_buttons)
    }

    pub fn page_info(&self, max_visible_buttons: usize) -> PageInfo {
        PageInfo::new(
            self.current_page,
            self.active_items.len(),
            self.page_size,
            max_visible_buttons,
        )
    }

    pub fn all_items(&self) -> &[AnnouncementItem] {
        &self.all_items
    }

    pub fn active_items(&self) -> &[AnnouncementItem] {
        &self.active_items
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }
}
