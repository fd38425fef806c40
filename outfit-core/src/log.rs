//! The outfit log: committed (date, outfit) entries.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::draft::OutfitDraft;

/// A committed outfit for a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitEntry {
    date: NaiveDate,
    outfit: OutfitDraft,
}

impl OutfitEntry {
    pub(crate) fn new(date: NaiveDate, outfit: OutfitDraft) -> Self {
        OutfitEntry { date, outfit }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn outfit(&self) -> &OutfitDraft {
        &self.outfit
    }
}

/// Append-only sequence of outfit entries.
///
/// Several entries may exist for the same day. [`OutfitLog::find_by_date`]
/// returns the first of them; use [`OutfitLog::entries_for_date`] to see the
/// rest.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OutfitLog {
    entries: Vec<OutfitEntry>,
}

impl OutfitLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to the end of the log, returning its index.
    pub fn append(&mut self, entry: OutfitEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// First entry planned for `date`.
    pub fn find_by_date(&self, date: NaiveDate) -> Option<&OutfitEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Same as [`OutfitLog::find_by_date`], ignoring the time of day.
    pub fn find_by_datetime(&self, datetime: NaiveDateTime) -> Option<&OutfitEntry> {
        self.find_by_date(datetime.date())
    }

    /// All entries for `date`, oldest first.
    pub fn entries_for_date(&self, date: NaiveDate) -> impl Iterator<Item = &OutfitEntry> {
        self.entries.iter().filter(move |e| e.date == date)
    }

    pub fn latest_for_date(&self, date: NaiveDate) -> Option<&OutfitEntry> {
        self.entries.iter().rev().find(|e| e.date == date)
    }

    pub fn get(&self, index: usize) -> Option<&OutfitEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OutfitEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
