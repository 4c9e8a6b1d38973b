use std::cmp::Reverse;

use crate::domain::{AnnouncementItem, SortMode};

/// Case-insensitive substring match on title or date. `needle` must already be
/// lowercased.
pub fn matches_query(item: &AnnouncementItem, needle: &str) -> bool {
    item.title().to_lowercase().contains(needle)
        || item
            .date
            .as_deref()
            .is_some_and(|date| date.to_lowercase().contains(needle))
}

/// Order-preserving subsequence of `items` matching `query`. An empty query
/// keeps everything.
pub fn filter_items(items: &[AnnouncementItem], query: &str) -> Vec<AnnouncementItem> {
    if query.is_empty() {
        return items.to_vec();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_query(item, &needle))
        .cloned()
        .collect()
}

/// Stable in-place sort by sorting date. Items with an indeterminate date
/// compare equal to each other and go after every dated item in both
/// directions. `SortMode::Default` leaves the order untouched.
pub fn sort_items(items: &mut [AnnouncementItem], mode: SortMode) {
    match mode {
        SortMode::Default => {}
        SortMode::Nearest => items.sort_by_cached_key(|item| {
            let key = item.sort_key();
            (key.is_none(), key)
        }),
        SortMode::Farthest => items.sort_by_cached_key(|item| {
            let key = item.sort_key();
            (key.is_none(), Reverse(key))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(title: &str, sorting_date: &str) -> AnnouncementItem {
        AnnouncementItem::new(title).with_sorting_date(sorting_date)
    }

    fn titles(items: &[AnnouncementItem]) -> Vec<&str> {
        items.iter().map(|i| i.title()).collect()
    }

    #[test]
    fn test_matches_title_or_date() {
        let item = AnnouncementItem::new("Exam Week").with_date("March 3, 2024");
        assert!(matches_query(&item, "exam"));
        assert!(matches_query(&item, "march"));
        assert!(!matches_query(&item, "orientation"));

        let untitled = AnnouncementItem::default();
        assert!(!matches_query(&untitled, "exam"));
        assert!(matches_query(&untitled, ""));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let items = vec![AnnouncementItem::new("Exam Week"), AnnouncementItem::new("Orientation")];
        assert_eq!(titles(&filter_items(&items, "EXAM")), vec!["Exam Week"]);
        assert_eq!(filter_items(&items, "").len(), 2);
    }

    #[test]
    fn test_sort_nearest_and_farthest() {
        let mut items = vec![
            dated("Mar", "2024-03-01"),
            dated("Jan", "2024-01-01"),
            dated("Feb", "02/01/2024"),
        ];

        sort_items(&mut items, SortMode::Nearest);
        assert_eq!(titles(&items), vec!["Jan", "Feb", "Mar"]);

        sort_items(&mut items, SortMode::Farthest);
        assert_eq!(titles(&items), vec!["Mar", "Feb", "Jan"]);
    }

    #[test]
    fn test_sort_is_stable_and_puts_indeterminate_last() {
        let mut items = vec![
            AnnouncementItem::new("undated-1"),
            dated("tie-a", "2024-05-01"),
            dated("garbage", "soon"),
            dated("tie-b", "2024-05-01"),
            dated("early", "2024-01-01"),
        ];

        sort_items(&mut items, SortMode::Nearest);
        assert_eq!(titles(&items), vec!["early", "tie-a", "tie-b", "undated-1", "garbage"]);

        sort_items(&mut items, SortMode::Farthest);
        assert_eq!(titles(&items), vec!["tie-a", "tie-b", "early", "undated-1", "garbage"]);
    }
}
