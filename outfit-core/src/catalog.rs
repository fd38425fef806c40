//! The clothing catalog: the items offered in each wizard step.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{OutfitError, OutfitResult};
use crate::item::{CatalogItem, ClothingItem};

/// Read-only mapping from category to an ordered list of items.
///
/// The catalog is injected into the planner at construction, either from
/// the config file or from [`Catalog::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    tops: Vec<ClothingItem>,
    bottoms: Vec<ClothingItem>,
    accessories: Vec<ClothingItem>,
}

impl Default for Catalog {
    /// Three placeholder images per category.
    fn default() -> Self {
        Catalog {
            tops: placeholders("Top"),
            bottoms: placeholders("Bottom"),
            accessories: placeholders("Accessory"),
        }
    }
}

fn placeholders(name: &str) -> Vec<ClothingItem> {
    (1..=3)
        .map(|n| ClothingItem::new(format!("/placeholder.svg?height=100&width=100&text={name}+{n}")))
        .collect()
}

impl Catalog {
    pub fn new(
        tops: Vec<ClothingItem>,
        bottoms: Vec<ClothingItem>,
        accessories: Vec<ClothingItem>,
    ) -> Self {
        Catalog {
            tops,
            bottoms,
            accessories,
        }
    }

    pub fn items(&self, category: Category) -> &[ClothingItem] {
        match category {
            Category::Tops => &self.tops,
            Category::Bottoms => &self.bottoms,
            Category::Accessories => &self.accessories,
        }
    }

    pub fn get(&self, category: Category, index: usize) -> OutfitResult<&ClothingItem> {
        self.items(category)
            .get(index)
            .ok_or_else(|| OutfitError::UnknownItem {
                category: category.to_string(),
                position: index + 1,
            })
    }

    /// Items of a category with their positional labels.
    pub fn entries(&self, category: Category) -> Vec<CatalogItem> {
        self.items(category)
            .iter()
            .enumerate()
            .map(|(index, item)| CatalogItem {
                category,
                index,
                item: item.clone(),
            })
            .collect()
    }

    /// Find the catalog entry for an item, for labelling a stored outfit.
    pub fn lookup(&self, category: Category, item: &ClothingItem) -> Option<CatalogItem> {
        let index = self.items(category).iter().position(|i| i == item)?;
        Some(CatalogItem {
            category,
            index,
            item: item.clone(),
        })
    }
}
