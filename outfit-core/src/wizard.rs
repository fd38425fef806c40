//! The outfit selection wizard.
//!
//! A three-step linear state machine (tops, bottoms, accessories) that
//! collects an [`OutfitDraft`] and commits it to an [`OutfitLog`]. It holds
//! no rendering state; a presentation layer reads [`SelectionWizard::title`],
//! [`SelectionWizard::can_advance`] and friends to draw its controls.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::category::Category;
use crate::draft::OutfitDraft;
use crate::item::ClothingItem;
use crate::log::{OutfitEntry, OutfitLog};

/// Outcome of pressing "Next"/"Finish".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The current step's required category is empty; nothing changed.
    Rejected,
    /// Moved on to the given step.
    Moved(Category),
    /// The outfit was committed as the log entry at this index.
    Finished(usize),
    /// At the last step but the outfit could not be committed.
    Refused,
}

#[derive(Debug, Clone)]
pub struct SelectionWizard {
    open: bool,
    step: Category,
    draft: OutfitDraft,
}

impl Default for SelectionWizard {
    fn default() -> Self {
        SelectionWizard {
            open: false,
            step: Category::Tops,
            draft: OutfitDraft::default(),
        }
    }
}

impl SelectionWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn step(&self) -> Category {
        self.step
    }

    pub fn draft(&self) -> &OutfitDraft {
        &self.draft
    }

    /// Open the dialog on the first step with an empty draft.
    pub fn open(&mut self) {
        debug!("Opening outfit wizard");
        self.open = true;
        self.reset();
    }

    /// Close the dialog, discarding the draft.
    pub fn cancel(&mut self) {
        debug!(step = %self.step, "Outfit wizard cancelled");
        self.open = false;
        self.reset();
    }

    fn reset(&mut self) {
        self.step = Category::Tops;
        self.draft = OutfitDraft::default();
    }

    /// Flip membership of `item` in the draft. Any category may be toggled
    /// regardless of the current step.
    pub fn toggle_item(&mut self, item: ClothingItem, category: Category) -> bool {
        let selected = self.draft.toggle(item, category);
        debug!(%category, selected, "Toggled item");
        selected
    }

    pub fn title(&self) -> &'static str {
        self.step.title()
    }

    /// Label of the forward control.
    pub fn next_label(&self) -> &'static str {
        if self.step == Category::Accessories {
            "Finish"
        } else {
            "Next"
        }
    }

    /// Whether the forward control is enabled: a required step needs at
    /// least one selected item of its own category.
    pub fn can_advance(&self) -> bool {
        !self.step.is_required() || !self.draft.items(self.step).is_empty()
    }

    pub fn can_retreat(&self) -> bool {
        self.step != Category::Tops
    }

    /// Move to the next step, or commit the outfit from the last step.
    pub fn advance(&mut self, date: Option<NaiveDate>, log: &mut OutfitLog) -> Advance {
        if !self.can_advance() {
            debug!(step = %self.step, "Advance rejected, no selection for step");
            return Advance::Rejected;
        }

        match Category::from_step_index(self.step.step_index() + 1) {
            Some(next) => {
                self.step = next;
                Advance::Moved(next)
            }
            None => match self.finalize(date, log) {
                Some(index) => Advance::Finished(index),
                None => Advance::Refused,
            },
        }
    }

    /// Go back one step; stays on the first step.
    pub fn retreat(&mut self) {
        if let Some(prev) = self
            .step
            .step_index()
            .checked_sub(1)
            .and_then(Category::from_step_index)
        {
            self.step = prev;
        }
    }

    /// Commit the draft for `date` when a date is set and the draft has at
    /// least one top and one bottom. Otherwise nothing changes.
    pub fn finalize(&mut self, date: Option<NaiveDate>, log: &mut OutfitLog) -> Option<usize> {
        let Some(date) = date else {
            debug!("Finalize refused, no date selected");
            return None;
        };
        if !self.draft.is_complete() {
            debug!("Finalize refused, outfit needs a top and a bottom");
            return None;
        }

        let outfit = std::mem::take(&mut self.draft);
        let index = log.append(OutfitEntry::new(date, outfit));
        info!(%date, index, "Outfit planned");

        self.open = false;
        self.step = Category::Tops;
        Some(index)
    }
}
