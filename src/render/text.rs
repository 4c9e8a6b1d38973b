use crate::{
    domain::AnnouncementItem,
    render::{truncate_chars, Renderer},
    view_model::PageInfo,
};

/// Plain-text listing for terminals.
pub struct TextListRenderer {
    description_chars: usize,
    output: String,
}

impl TextListRenderer {
    pub fn new(description_chars: usize) -> Self {
        Self {
            description_chars,
            output: String::new(),
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

impl Renderer for TextListRenderer {
    fn render(&mut self, items: &[AnnouncementItem], page: &PageInfo) {
        let mut out = String::new();

        if items.is_empty() {
            out.push_str("No announcements\n");
        }

        for item in items {
            match item.date.as_deref() {
                Some(date) => out.push_str(&format!("* {} ({})\n", item.title(), date)),
                None => out.push_str(&format!("* {}\n", item.title())),
            }
            if let Some(description) = item.description.as_deref().filter(|d| !d.is_empty()) {
                out.push_str(&format!("    {}\n", truncate_chars(description, self.description_chars)));
            }
            if let Some(link) = item.link.as_deref() {
                out.push_str(&format!("    {}\n", link));
            }
        }

        let mut footer = vec![format!(
            "-- page {} of {} ({} items)",
            page.current_page, page.page_count, page.total_items
        )];
        if page.has_previous() {
            footer.push("<".to_string());
        }
        footer.extend(
            page.window()
                .pages()
                .map(|n| if n == page.current_page { format!("[{}]", n) } else { n.to_string() }),
        );
        if page.has_next() {
            footer.push(">".to_string());
        }
        out.push_str(&footer.join(" "));
        out.push('\n');

        self.output = out;
    }
}
