//! The calendar side of the planner: the selected day and what is planned
//! for it.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::category::Category;
use crate::draft::OutfitDraft;
use crate::item::ClothingItem;
use crate::log::OutfitLog;

/// Heading shown when no day is selected.
pub const NO_DATE_HEADING: &str = "Select a date";

#[derive(Debug, Clone)]
pub struct CalendarView {
    selected: Option<NaiveDate>,
}

impl Default for CalendarView {
    /// Starts on today's local date.
    fn default() -> Self {
        CalendarView {
            selected: Some(Local::now().date_naive()),
        }
    }
}

impl CalendarView {
    pub fn new(selected: Option<NaiveDate>) -> Self {
        CalendarView { selected }
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Build the outfit panel for the selected day.
    pub fn summary(&self, log: &OutfitLog) -> OutfitSummary {
        let Some(date) = self.selected else {
            return OutfitSummary {
                date: None,
                heading: NO_DATE_HEADING.to_string(),
                body: SummaryBody::NoDateSelected,
                other_entries: 0,
            };
        };

        let body = match log.find_by_date(date) {
            Some(entry) => SummaryBody::Outfit(entry.outfit().clone()),
            None => SummaryBody::NoOutfit,
        };

        OutfitSummary {
            date: Some(date),
            heading: format_heading(date),
            body,
            other_entries: log.entries_for_date(date).count().saturating_sub(1),
        }
    }
}

/// "March 10, 2024"
pub fn format_heading(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// What the outfit panel shows for the selected day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitSummary {
    pub date: Option<NaiveDate>,
    pub heading: String,
    pub body: SummaryBody,
    /// Entries for the same day that are shadowed by the displayed one
    pub other_entries: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "outfit", rename_all = "snake_case")]
pub enum SummaryBody {
    NoDateSelected,
    NoOutfit,
    Outfit(OutfitDraft),
}

impl OutfitSummary {
    /// Items of a category in the displayed outfit, if there is one.
    pub fn items(&self, category: Category) -> Option<&[ClothingItem]> {
        match &self.body {
            SummaryBody::Outfit(outfit) => Some(outfit.items(category)),
            _ => None,
        }
    }
}
