//! TUI rendering traits for outfit-core types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to outfit-core types using owo_colors.

use outfit_core::{Catalog, CatalogItem, Category, ClothingItem, OutfitSummary, StepOption, SummaryBody};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for CatalogItem {
    fn render(&self) -> String {
        format!("{}  {}", self.label(), self.item.reference().dimmed())
    }
}

impl Render for StepOption {
    fn render(&self) -> String {
        if self.checked {
            format!("{} {}", "[x]".green(), self.item.label().green())
        } else {
            format!("[ ] {}", self.item.label())
        }
    }
}

/// Rendering for the outfit panel. Items are labelled through the catalog
/// they were picked from.
pub trait SummaryRender {
    fn render(&self, catalog: &Catalog) -> String;
}

impl SummaryRender for OutfitSummary {
    fn render(&self, catalog: &Catalog) -> String {
        let mut lines = vec![format!("📅 {}", self.heading.bold())];

        match &self.body {
            SummaryBody::NoDateSelected => {}
            SummaryBody::NoOutfit => {
                lines.push(format!("   {}", "No outfit planned".dimmed()));
            }
            SummaryBody::Outfit(outfit) => {
                for category in Category::ALL {
                    lines.push(format!("   {}", category.heading().bold()));
                    let items = outfit.items(category);
                    if items.is_empty() {
                        lines.push(format!("     {}", "None".dimmed()));
                    }
                    for item in items {
                        lines.push(format!("     {}", item_label(catalog, category, item)));
                    }
                }
                if self.other_entries > 0 {
                    let label = format!(
                        "({} more {} for this day)",
                        self.other_entries,
                        pluralize("outfit", self.other_entries)
                    );
                    lines.push(format!("   {}", label.dimmed()));
                }
            }
        }

        lines.join("\n")
    }
}

/// Label an item by its catalog position, falling back to its reference
/// when the catalog no longer has it.
fn item_label(catalog: &Catalog, category: Category, item: &ClothingItem) -> String {
    match catalog.lookup(category, item) {
        Some(entry) => entry.render(),
        None => item.reference().to_string(),
    }
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use outfit_core::{Advance, CalendarView, OutfitPlanner};

    fn planner() -> OutfitPlanner {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        OutfitPlanner::with_calendar(Catalog::default(), CalendarView::new(Some(date)))
    }

    #[test]
    fn renders_planned_outfit_with_none_for_accessories() {
        let mut planner = planner();
        planner.open_wizard();
        planner.toggle(Category::Tops, 0).unwrap();
        planner.next();
        planner.toggle(Category::Bottoms, 1).unwrap();
        planner.next();
        assert_eq!(planner.next(), Advance::Finished(0));

        let out = planner.summary().render(planner.catalog());
        assert!(out.contains("March 10, 2024"));
        assert!(out.contains("Top 1"));
        assert!(out.contains("Bottom 2"));
        assert!(out.contains("None"));
        assert!(!out.contains("Top 2"));
        assert!(!out.contains("more outfit"));
    }

    #[test]
    fn renders_placeholder_without_outfit() {
        let out = planner().summary().render(&Catalog::default());
        assert!(out.contains("No outfit planned"));
    }

    #[test]
    fn renders_select_a_date_without_selection() {
        let mut planner = planner();
        planner.clear_selection();
        let out = planner.summary().render(planner.catalog());
        assert!(out.contains("Select a date"));
        assert!(!out.contains("No outfit planned"));
    }

    #[test]
    fn mentions_shadowed_outfits() {
        let mut planner = planner();
        for _ in 0..3 {
            planner.open_wizard();
            planner.toggle(Category::Tops, 0).unwrap();
            planner.toggle(Category::Bottoms, 0).unwrap();
            planner.next();
            planner.next();
            planner.next();
        }
        let out = planner.summary().render(planner.catalog());
        assert!(out.contains("2 more outfits for this day"));
    }

    #[test]
    fn unknown_items_fall_back_to_reference() {
        let catalog = Catalog::new(vec![], vec![], vec![]);
        let label = item_label(&catalog, Category::Tops, &ClothingItem::from("shirt.png"));
        assert_eq!(label, "shirt.png");
    }

    #[test]
    fn pluralizes() {
        assert_eq!(pluralize("outfit", 1), "outfit");
        assert_eq!(pluralize("outfit", 2), "outfits");
    }
}
