use askama::Template;

use crate::{
    config::RenderConfig,
    domain::{AnnouncementFeed, FeedSelection},
    error::Result,
    render::{carousel, section_preview},
};

pub struct HomeSection {
    pub id: &'static str,
    pub label: &'static str,
    pub carousel: String,
    pub preview: String,
}

#[derive(Template)]
#[template(path = "home/homepage.html")]
pub struct HomepageTemplate {
    pub sections: Vec<HomeSection>,
}

/// One carousel and one preview list per selected section, each preview
/// linking to the section's full listing. Guest selections only show
/// guest-visible items.
pub fn homepage(feed: &AnnouncementFeed, selection: &FeedSelection, config: &RenderConfig) -> Result<String> {
    let mut sections = Vec::with_capacity(selection.sections.len());

    for section in &selection.sections {
        let items = feed.select(&FeedSelection {
            sections: vec![*section],
            guest_only: selection.guest_only,
        });

        sections.push(HomeSection {
            id: section.as_str(),
            label: section.label(),
            carousel: carousel(&items, config)?,
            preview: section_preview(&items, section.page_path(), config)?,
        });
    }

    tracing::debug!("Rendered homepage with {} sections", sections.len());
    Ok(HomepageTemplate { sections }.render()?)
}
