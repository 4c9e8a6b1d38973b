//! Homepage widgets: the short per-section preview lists and the image
//! carousels.

use askama::Template;

use crate::{
    config::RenderConfig,
    domain::AnnouncementItem,
    error::Result,
    render::truncate_chars,
};

pub struct PreviewEntry {
    pub title: String,
    pub date: String,
    pub href: String,
}

#[derive(Template)]
#[template(path = "home/section_preview.html")]
pub struct SectionPreviewTemplate {
    pub entries: Vec<PreviewEntry>,
    pub has_more: bool,
    pub more_link: String,
}

pub struct Slide {
    pub title: String,
    pub date: String,
    pub href: String,
    pub image_src: String,
    pub caption: String,
}

#[derive(Template)]
#[template(path = "home/carousel.html")]
pub struct CarouselTemplate {
    pub slides: Vec<Slide>,
}

fn link_or_anchor(item: &AnnouncementItem) -> String {
    item.link
        .as_deref()
        .filter(|link| !link.is_empty())
        .unwrap_or("#")
        .to_string()
}

/// First few items of a section with a "View More" button pointing at the
/// full listing when the section has more.
pub fn section_preview(items: &[AnnouncementItem], more_link: &str, config: &RenderConfig) -> Result<String> {
    let template = SectionPreviewTemplate {
        entries: items
            .iter()
            .take(config.section_preview_items)
            .map(|item| PreviewEntry {
                title: item.title().to_string(),
                date: item.date.clone().unwrap_or_default(),
                href: link_or_anchor(item),
            })
            .collect(),
        has_more: items.len() > config.section_preview_items,
        more_link: more_link.to_string(),
    };
    Ok(template.render()?)
}

pub fn carousel(items: &[AnnouncementItem], config: &RenderConfig) -> Result<String> {
    let template = CarouselTemplate {
        slides: items
            .iter()
            .map(|item| Slide {
                title: item.title().to_string(),
                date: item.date.clone().unwrap_or_default(),
                href: link_or_anchor(item),
                image_src: item
                    .image_attachment
                    .clone()
                    .filter(|path| !path.is_empty())
                    .unwrap_or_else(|| config.default_image.clone()),
                caption: truncate_chars(
                    item.description.as_deref().unwrap_or(""),
                    config.carousel_preview_chars,
                ),
            })
            .collect(),
    };
    Ok(template.render()?)
}
