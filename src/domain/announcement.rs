use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One announcement, deadline/event, or milestone as served in the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub sorting_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image_attachment: Option<String>,
    #[serde(default)]
    pub guest_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announcement_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_id: Option<i64>,
}

impl AnnouncementItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_sorting_date(mut self, sorting_date: impl Into<String>) -> Self {
        self.sorting_date = Some(sorting_date.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_image(mut self, image_attachment: impl Into<String>) -> Self {
        self.image_attachment = Some(image_attachment.into());
        self
    }

    pub fn guest_visible(mut self) -> Self {
        self.guest_mode = true;
        self
    }

    /// Title for display and search; empty when the feed omitted it.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// The point in time used for ordering, or `None` when the sorting date is
    /// missing or unparseable.
    pub fn sort_key(&self) -> Option<NaiveDateTime> {
        self.sorting_date.as_deref().and_then(parse_sorting_date)
    }
}

/// Accepts the date shapes the portal has been seen to emit. Anything else is
/// indeterminate.
pub fn parse_sorting_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    // %m/%d/%Y is what the archiver writes
    for format in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Original feed order.
    #[default]
    Default,
    /// Earliest sorting date first.
    Nearest,
    /// Latest sorting date first.
    Farthest,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::Nearest => "nearest",
            SortMode::Farthest => "farthest",
        }
    }
}

impl FromStr for SortMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(SortMode::Default),
            "nearest" => Ok(SortMode::Nearest),
            "farthest" => Ok(SortMode::Farthest),
            other => Err(AppError::InvalidArgument(format!("Unknown sort mode: {}", other))),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sorting_date_formats() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(parse_sorting_date("2024-01-15"), Some(jan));
        assert_eq!(parse_sorting_date("01/15/2024"), Some(jan));
        assert_eq!(parse_sorting_date(" 2024-01-15 "), Some(jan));
        assert_eq!(parse_sorting_date("2024-01-15T00:00:00"), Some(jan));
        assert_eq!(parse_sorting_date("2024-01-15T00:00:00Z"), Some(jan));
        assert_eq!(parse_sorting_date("2024-01-15 08:30:00").map(|d| d.date()), Some(jan.date()));
    }

    #[test]
    fn test_invalid_sorting_date_is_indeterminate() {
        assert_eq!(parse_sorting_date(""), None);
        assert_eq!(parse_sorting_date("next tuesday"), None);
        assert_eq!(parse_sorting_date("2024-13-45"), None);
        assert_eq!(AnnouncementItem::new("No date").sort_key(), None);
    }

    #[test]
    fn test_sort_mode_from_str() {
        assert_eq!("nearest".parse::<SortMode>().unwrap(), SortMode::Nearest);
        assert_eq!("FARTHEST".parse::<SortMode>().unwrap(), SortMode::Farthest);
        assert_eq!("default".parse::<SortMode>().unwrap(), SortMode::Default);
        assert!("sideways".parse::<SortMode>().is_err());
        assert_eq!(SortMode::Nearest.to_string(), "nearest");
    }

    #[test]
    fn test_item_deserializes_with_missing_fields() {
        let item: AnnouncementItem = serde_json::from_str(
            r#"{"date": "March 1", "sorting_date": "03/01/2024", "likes": {"amount": 3}}"#,
        )
        .unwrap();
        assert_eq!(item.title, None);
        assert_eq!(item.title(), "");
        assert!(!item.guest_mode);
        assert!(item.sort_key().is_some());
    }
}
