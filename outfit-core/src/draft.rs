//! In-progress outfit selections.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::item::ClothingItem;

/// The items chosen for each category.
///
/// Used both for the wizard's uncommitted draft and for the outfit stored
/// in a committed entry. Membership is toggled, so an item appears at most
/// once per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitDraft {
    pub tops: Vec<ClothingItem>,
    pub bottoms: Vec<ClothingItem>,
    pub accessories: Vec<ClothingItem>,
}

impl OutfitDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self, category: Category) -> &[ClothingItem] {
        match category {
            Category::Tops => &self.tops,
            Category::Bottoms => &self.bottoms,
            Category::Accessories => &self.accessories,
        }
    }

    fn items_mut(&mut self, category: Category) -> &mut Vec<ClothingItem> {
        match category {
            Category::Tops => &mut self.tops,
            Category::Bottoms => &mut self.bottoms,
            Category::Accessories => &mut self.accessories,
        }
    }

    pub fn contains(&self, category: Category, item: &ClothingItem) -> bool {
        self.items(category).contains(item)
    }

    /// Add the item if absent, remove it if present.
    /// Returns whether the item is selected afterwards.
    pub fn toggle(&mut self, item: ClothingItem, category: Category) -> bool {
        let items = self.items_mut(category);
        match items.iter().position(|i| *i == item) {
            Some(pos) => {
                items.remove(pos);
                false
            }
            None => {
                items.push(item);
                true
            }
        }
    }

    /// At least one top and one bottom; accessories are optional.
    pub fn is_complete(&self) -> bool {
        Category::ALL
            .iter()
            .filter(|c| c.is_required())
            .all(|c| !self.items(*c).is_empty())
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.items(*c).is_empty())
    }
}
