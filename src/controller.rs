use crate::{
    data_source::DataSource,
    domain::{AnnouncementItem, FeedSelection, SortMode},
    error::Result,
    render::Renderer,
    view_model::{ListViewModel, PageInfo, DEFAULT_MAX_VISIBLE_BUTTONS},
};

/// Identifies one load request. Only the most recently issued ticket may
/// apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { items: usize },
    /// A newer load was started after this one; its result was dropped.
    Stale,
}

/// Binds a view model to a renderer: every state transition is followed by
/// a render of the visible slice.
pub struct ListController<R: Renderer> {
    view_model: ListViewModel,
    renderer: R,
    max_visible_buttons: usize,
    generation: u64,
}

impl<R: Renderer> ListController<R> {
    pub fn new(view_model: ListViewModel, renderer: R) -> Self {
        Self {
            view_model,
            renderer,
            max_visible_buttons: DEFAULT_MAX_VISIBLE_BUTTONS,
            generation: 0,
        }
    }

    pub fn with_max_visible_buttons(mut self, max_visible_buttons: usize) -> Self {
        self.max_visible_buttons = max_visible_buttons.max(1);
        self
    }

    pub fn view_model(&self) -> &ListViewModel {
        &self.view_model
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn page_info(&self) -> PageInfo {
        self.view_model.page_info(self.max_visible_buttons)
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Applies a finished load. Results for superseded tickets are dropped; a
    /// failed load leaves the current items in place and returns the error.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<AnnouncementItem>>,
    ) -> Result<LoadOutcome> {
        if ticket.generation != self.generation {
            tracing::warn!(
                "Discarding load generation {} (current is {})",
                ticket.generation,
                self.generation
            );
            return Ok(LoadOutcome::Stale);
        }

        match result {
            Ok(items) => {
                self.view_model.set_items(&items);
                self.render();
                tracing::info!("Load generation {} applied {} items", ticket.generation, items.len());
                Ok(LoadOutcome::Applied { items: items.len() })
            }
            Err(e) => {
                tracing::error!("Load generation {} failed: {}", ticket.generation, e);
                Err(e)
            }
        }
    }

    pub async fn load(
        &mut self,
        source: &dyn DataSource,
        selection: &FeedSelection,
    ) -> Result<LoadOutcome> {
        let ticket = self.begin_load();
        tracing::debug!("Loading from {} source (generation {})", source.name(), ticket.generation);
        let result = source.load().await.map(|feed| feed.select(selection));
        self.finish_load(ticket, result)
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.view_model.set_search_query(query);
        self.render();
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.view_model.set_sort_mode(mode);
        self.render();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.view_model.go_to_page(page);
        self.render();
    }

    pub fn next_page(&mut self) {
        if self.view_model.next_page() {
            self.render();
        }
    }

    pub fn previous_page(&mut self) {
        if self.view_model.previous_page() {
            self.render();
        }
    }

    pub fn render(&mut self) {
        let page = self.page_info();
        self.renderer.render(self.view_model.visible_slice(), &page);
    }
}
