pub mod homepage;
pub mod html;
pub mod section;
pub mod text;

use crate::domain::AnnouncementItem;
use crate::view_model::PageInfo;

pub use homepage::homepage;
pub use html::HtmlListRenderer;
pub use section::{carousel, section_preview};
pub use text::TextListRenderer;

/// Draws one page of the working set plus its pagination controls. Called
/// after every view model transition.
pub trait Renderer {
    fn render(&mut self, items: &[AnnouncementItem], page: &PageInfo);
}

/// Cuts `text` to `max_chars` characters and appends "..." when anything was
/// dropped.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
