//! The planner: one catalog, one calendar, one wizard, one outfit log.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{CalendarView, OutfitSummary};
use crate::catalog::Catalog;
use crate::category::Category;
use crate::error::OutfitResult;
use crate::item::CatalogItem;
use crate::log::OutfitLog;
use crate::wizard::{Advance, SelectionWizard};

/// The current wizard step, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepView {
    pub title: &'static str,
    pub category: Category,
    pub options: Vec<StepOption>,
    pub next_label: &'static str,
    pub next_enabled: bool,
    pub back_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOption {
    pub item: CatalogItem,
    pub checked: bool,
}

#[derive(Debug, Clone)]
pub struct OutfitPlanner {
    catalog: Catalog,
    calendar: CalendarView,
    wizard: SelectionWizard,
    log: OutfitLog,
}

impl OutfitPlanner {
    /// A planner over `catalog`, starting on today's date with an empty log.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_calendar(catalog, CalendarView::default())
    }

    pub fn with_calendar(catalog: Catalog, calendar: CalendarView) -> Self {
        OutfitPlanner {
            catalog,
            calendar,
            wizard: SelectionWizard::new(),
            log: OutfitLog::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn log(&self) -> &OutfitLog {
        &self.log
    }

    pub fn wizard(&self) -> &SelectionWizard {
        &self.wizard
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.calendar.selected()
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.calendar.select_date(date);
    }

    pub fn clear_selection(&mut self) {
        self.calendar.clear_selection();
    }

    /// The outfit panel for the selected date.
    pub fn summary(&self) -> OutfitSummary {
        self.calendar.summary(&self.log)
    }

    pub fn open_wizard(&mut self) {
        self.wizard.open();
    }

    /// Toggle the catalog item at `index` (zero-based) in `category`.
    pub fn toggle(&mut self, category: Category, index: usize) -> OutfitResult<bool> {
        let item = self.catalog.get(category, index)?.clone();
        Ok(self.wizard.toggle_item(item, category))
    }

    /// "Next" / "Finish", committing for the selected date.
    pub fn next(&mut self) -> Advance {
        self.wizard.advance(self.calendar.selected(), &mut self.log)
    }

    /// "Back"
    pub fn back(&mut self) {
        self.wizard.retreat();
    }

    pub fn cancel(&mut self) {
        self.wizard.cancel();
    }

    pub fn step_view(&self) -> StepView {
        let category = self.wizard.step();
        let draft = self.wizard.draft();
        let options = self
            .catalog
            .entries(category)
            .into_iter()
            .map(|item| StepOption {
                checked: draft.contains(category, &item.item),
                item,
            })
            .collect();

        StepView {
            title: self.wizard.title(),
            category,
            options,
            next_label: self.wizard.next_label(),
            next_enabled: self.wizard.can_advance(),
            back_enabled: self.wizard.can_retreat(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::SummaryBody;
    use crate::item::ClothingItem;

    fn planner_on(y: i32, m: u32, d: u32) -> OutfitPlanner {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        OutfitPlanner::with_calendar(Catalog::default(), CalendarView::new(Some(date)))
    }

    fn labels(planner: &OutfitPlanner, category: Category) -> Vec<String> {
        planner
            .summary()
            .items(category)
            .unwrap()
            .iter()
            .map(|item| planner.catalog().lookup(category, item).unwrap().label())
            .collect()
    }

    #[test]
    fn plans_an_outfit_end_to_end() {
        let mut planner = OutfitPlanner::new(Catalog::default());
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        planner.select_date(date);

        planner.open_wizard();
        planner.toggle(Category::Tops, 0).unwrap();
        assert_eq!(planner.next(), Advance::Moved(Category::Bottoms));
        planner.toggle(Category::Bottoms, 1).unwrap();
        assert_eq!(planner.next(), Advance::Moved(Category::Accessories));
        assert_eq!(planner.next(), Advance::Finished(0));

        assert_eq!(planner.log().len(), 1);
        let entry = planner.log().get(0).unwrap();
        assert_eq!(entry.date(), date);
        assert_eq!(entry.outfit().tops, vec![ClothingItem::from("/placeholder.svg?height=100&width=100&text=Top+1")]);
        assert_eq!(entry.outfit().bottoms, vec![ClothingItem::from("/placeholder.svg?height=100&width=100&text=Bottom+2")]);
        assert!(entry.outfit().accessories.is_empty());

        // Revisit the date from elsewhere
        planner.select_date(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(planner.summary().body, SummaryBody::NoOutfit);
        planner.select_date(date);

        let summary = planner.summary();
        assert_eq!(summary.heading, "March 10, 2024");
        assert_eq!(labels(&planner, Category::Tops), ["Top 1"]);
        assert_eq!(labels(&planner, Category::Bottoms), ["Bottom 2"]);
        assert!(summary.items(Category::Accessories).unwrap().is_empty());
    }

    #[test]
    fn next_without_tops_is_rejected() {
        let mut planner = planner_on(2024, 3, 10);
        planner.open_wizard();

        assert!(!planner.step_view().next_enabled);
        assert_eq!(planner.next(), Advance::Rejected);
        assert_eq!(planner.wizard().step(), Category::Tops);
        assert!(planner.log().is_empty());
    }

    #[test]
    fn step_view_reflects_wizard() {
        let mut planner = planner_on(2024, 3, 10);
        planner.open_wizard();
        planner.toggle(Category::Tops, 2).unwrap();

        let view = planner.step_view();
        assert_eq!(view.title, "Choose Tops");
        assert_eq!(view.next_label, "Next");
        assert!(view.next_enabled);
        assert!(!view.back_enabled);
        let checked: Vec<_> = view.options.iter().map(|o| o.checked).collect();
        assert_eq!(checked, [false, false, true]);
        assert_eq!(view.options[2].item.label(), "Top 3");

        planner.next();
        planner.toggle(Category::Bottoms, 0).unwrap();
        planner.next();
        let view = planner.step_view();
        assert_eq!(view.title, "Choose Accessories");
        assert_eq!(view.next_label, "Finish");
        assert!(view.back_enabled);
    }

    #[test]
    fn toggle_unknown_position_is_an_error() {
        let mut planner = planner_on(2024, 3, 10);
        planner.open_wizard();
        assert!(planner.toggle(Category::Accessories, 7).is_err());
        assert!(planner.wizard().draft().is_empty());
    }

    #[test]
    fn finish_without_date_keeps_wizard_open() {
        let mut planner = planner_on(2024, 3, 10);
        planner.open_wizard();
        planner.toggle(Category::Tops, 0).unwrap();
        planner.next();
        planner.toggle(Category::Bottoms, 0).unwrap();
        planner.next();
        planner.clear_selection();

        assert_eq!(planner.next(), Advance::Refused);
        assert!(planner.wizard().is_open());
        assert!(planner.log().is_empty());
        assert_eq!(planner.summary().body, SummaryBody::NoDateSelected);
    }

    #[test]
    fn cancel_discards_selection() {
        let mut planner = planner_on(2024, 3, 10);
        planner.open_wizard();
        planner.toggle(Category::Tops, 0).unwrap();
        planner.next();
        planner.cancel();

        assert!(!planner.wizard().is_open());
        assert!(planner.wizard().draft().is_empty());
        assert!(planner.log().is_empty());
    }
}
