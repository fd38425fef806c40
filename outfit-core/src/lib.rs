//! Core types for the outfit planner.
//!
//! This crate holds the planner's state and nothing about how it is drawn:
//! - `wizard`: the three-step outfit selection state machine
//! - `log`: committed outfits, looked up by day
//! - `calendar`: the selected day and the outfit panel built for it
//! - `planner`: ties the above together around an injected `Catalog`

pub mod calendar;
pub mod catalog;
pub mod category;
pub mod config;
pub mod draft;
pub mod error;
pub mod item;
pub mod log;
pub mod planner;
pub mod wizard;

pub use calendar::{CalendarView, OutfitSummary, SummaryBody};
pub use catalog::Catalog;
pub use category::Category;
pub use draft::OutfitDraft;
pub use error::{OutfitError, OutfitResult};
pub use item::{CatalogItem, ClothingItem};
pub use log::{OutfitEntry, OutfitLog};
pub use planner::{OutfitPlanner, StepOption, StepView};
pub use wizard::{Advance, SelectionWizard};
