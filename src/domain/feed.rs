use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::AnnouncementItem;

/// The announcements document. Sections missing from the JSON load as empty,
/// since the archive document only carries some of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementFeed {
    #[serde(default)]
    pub important_announcements: Vec<AnnouncementItem>,
    #[serde(default)]
    pub upcoming_deadlines_events: Vec<AnnouncementItem>,
    #[serde(default)]
    pub milestones: Vec<AnnouncementItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedSection {
    Important,
    Upcoming,
    Milestones,
}

impl FeedSection {
    pub const ALL: [FeedSection; 3] = [
        FeedSection::Important,
        FeedSection::Upcoming,
        FeedSection::Milestones,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedSection::Important => "important",
            FeedSection::Upcoming => "upcoming",
            FeedSection::Milestones => "milestones",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedSection::Important => "Important Announcements",
            FeedSection::Upcoming => "Upcoming Deadlines & Events",
            FeedSection::Milestones => "Milestones",
        }
    }

    /// Page that lists the whole section.
    pub fn page_path(&self) -> &'static str {
        match self {
            FeedSection::Important => "/important",
            FeedSection::Upcoming => "/upcoming",
            FeedSection::Milestones => "/milestones",
        }
    }
}

impl AnnouncementFeed {
    pub fn section(&self, section: FeedSection) -> &[AnnouncementItem] {
        match section {
            FeedSection::Important => &self.important_announcements,
            FeedSection::Upcoming => &self.upcoming_deadlines_events,
            FeedSection::Milestones => &self.milestones,
        }
    }

    pub fn len(&self) -> usize {
        FeedSection::ALL.iter().map(|s| self.section(*s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn section_mut(&mut self, section: FeedSection) -> &mut Vec<AnnouncementItem> {
        match section {
            FeedSection::Important => &mut self.important_announcements,
            FeedSection::Upcoming => &mut self.upcoming_deadlines_events,
            FeedSection::Milestones => &mut self.milestones,
        }
    }

    /// Highest `archive_id` in the document, 0 when none is assigned.
    pub fn max_archive_id(&self) -> i64 {
        FeedSection::ALL
            .iter()
            .flat_map(|s| self.section(*s).iter())
            .filter_map(|item| item.archive_id)
            .max()
            .unwrap_or(0)
    }

    /// Moves announcements and events whose sorting date falls before `today`
    /// into `archive.important_announcements`, numbering each with the next
    /// free `archive_id`. Milestones never expire, and items without a usable
    /// sorting date stay where they are. Returns how many items moved.
    pub fn archive_expired(&mut self, archive: &mut AnnouncementFeed, today: NaiveDate) -> usize {
        let mut next_id = archive.max_archive_id();
        let mut moved = 0;

        for section in [FeedSection::Important, FeedSection::Upcoming] {
            let items = std::mem::take(self.section_mut(section));
            let (expired, kept): (Vec<_>, Vec<_>) = items
                .into_iter()
                .partition(|item| item.sort_key().is_some_and(|at| at.date() < today));
            *self.section_mut(section) = kept;

            for mut item in expired {
                next_id += 1;
                item.archive_id = Some(next_id);
                archive.important_announcements.push(item);
                moved += 1;
            }
        }

        if moved > 0 {
            tracing::info!("Archived {} expired announcements (as of {})", moved, today);
        }
        moved
    }

    pub fn select(&self, selection: &FeedSelection) -> Vec<AnnouncementItem> {
        selection
            .sections
            .iter()
            .flat_map(|section| self.section(*section).iter())
            .filter(|item| !selection.guest_only || item.guest_mode)
            .cloned()
            .collect()
    }
}

/// Which part of the feed a page lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSelection {
    pub sections: Vec<FeedSection>,
    pub guest_only: bool,
}

impl FeedSelection {
    pub fn section(section: FeedSection) -> Self {
        Self {
            sections: vec![section],
            guest_only: false,
        }
    }

    /// Every section concatenated, as the archive page lists them.
    pub fn all() -> Self {
        Self {
            sections: FeedSection::ALL.to_vec(),
            guest_only: false,
        }
    }

    pub fn guests_only(mut self) -> Self {
        self.guest_only = true;
        self
    }
}

impl Default for FeedSelection {
    fn default() -> Self {
        Self::all()
    }
}
