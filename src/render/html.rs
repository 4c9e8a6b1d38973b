use askama::Template;

use crate::{
    config::RenderConfig,
    domain::AnnouncementItem,
    error::Result,
    render::{truncate_chars, Renderer},
    view_model::PageInfo,
};

/// Display fields of one card. Empty strings are left out of the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub date: String,
    pub description: String,
    pub image_src: String,
    pub read_more: String,
}

impl CardView {
    pub fn from_item(item: &AnnouncementItem, config: &RenderConfig) -> Self {
        Self {
            title: item.title().to_string(),
            date: item.date.clone().unwrap_or_default(),
            description: item
                .description
                .as_deref()
                .map(|d| truncate_chars(d, config.description_preview_chars))
                .unwrap_or_default(),
            image_src: image_src(item, config),
            read_more: read_more_href(item).unwrap_or_default(),
        }
    }
}

fn image_src(item: &AnnouncementItem, config: &RenderConfig) -> String {
    match item.image_attachment.as_deref() {
        Some(path) if !path.is_empty() => {
            if path.starts_with("http://") || path.starts_with("https://") || path.starts_with(&config.static_prefix) {
                path.to_string()
            } else {
                format!("{}{}", config.static_prefix, path)
            }
        }
        _ => config.default_image.clone(),
    }
}

/// Archived items point at their archive page instead of the outbound link.
/// Items without a link get no "Read More" either way.
fn read_more_href(item: &AnnouncementItem) -> Option<String> {
    let link = item.link.as_deref().filter(|link| !link.is_empty())?;
    match item.archive_id {
        Some(archive_id) => Some(format!("/archives/{}", archive_id)),
        None => Some(link.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "list/cards.html")]
pub struct CardsTemplate {
    pub cards: Vec<CardView>,
}

#[derive(Template)]
#[template(path = "list/pagination.html")]
pub struct PaginationTemplate {
    pub home_url: String,
    pub has_previous: bool,
    pub previous_page: usize,
    pub buttons: Vec<PageButton>,
    pub has_next: bool,
    pub next_page: usize,
}

impl PaginationTemplate {
    pub fn new(page: &PageInfo, home_url: &str) -> Self {
        Self {
            home_url: home_url.to_string(),
            has_previous: page.has_previous(),
            previous_page: page.current_page.saturating_sub(1),
            buttons: page
                .window()
                .pages()
                .map(|number| PageButton {
                    number,
                    active: number == page.current_page,
                })
                .collect(),
            has_next: page.has_next(),
            next_page: page.current_page + 1,
        }
    }
}

/// Renders announcement cards followed by the pagination bar. The markup of
/// the latest render is kept in `output`.
pub struct HtmlListRenderer {
    config: RenderConfig,
    output: String,
    renders: usize,
}

impl HtmlListRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            output: String::new(),
            renders: 0,
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn cards(&self, items: &[AnnouncementItem]) -> Result<String> {
        let template = CardsTemplate {
            cards: items.iter().map(|item| CardView::from_item(item, &self.config)).collect(),
        };
        Ok(template.render()?)
    }

    pub fn pagination(&self, page: &PageInfo) -> Result<String> {
        Ok(PaginationTemplate::new(page, &self.config.home_url).render()?)
    }

    pub fn page_html(&self, items: &[AnnouncementItem], page: &PageInfo) -> Result<String> {
        Ok(format!("{}\n{}", self.cards(items)?, self.pagination(page)?))
    }
}

impl Renderer for HtmlListRenderer {
    fn render(&mut self, items: &[AnnouncementItem], page: &PageInfo) {
        self.renders += 1;
        match self.page_html(items, page) {
            Ok(html) => {
                self.output = html;
                tracing::debug!(
                    "Rendered page {}/{} with {} cards",
                    page.current_page,
                    page.page_count,
                    items.len()
                );
            }
            Err(e) => {
                tracing::error!("Failed to render page {}: {}", page.current_page, e);
                self.output.clear();
            }
        }
    }
}
