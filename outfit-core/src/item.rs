//! Clothing item references.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// An opaque reference to a displayable asset, such as an image URL.
///
/// Nothing inside the reference is interpreted; two items are the same
/// item when their references are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClothingItem(String);

impl ClothingItem {
    pub fn new(reference: impl Into<String>) -> Self {
        ClothingItem(reference.into())
    }

    pub fn reference(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClothingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClothingItem {
    fn from(s: &str) -> Self {
        ClothingItem::new(s)
    }
}

impl From<String> for ClothingItem {
    fn from(s: String) -> Self {
        ClothingItem(s)
    }
}

/// A catalog item together with its display metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    pub category: Category,
    /// Zero-based position within the category's list
    pub index: usize,
    pub item: ClothingItem,
}

impl CatalogItem {
    /// Human label, numbered from 1: "Top 1", "Accessory 3".
    pub fn label(&self) -> String {
        format!("{} {}", self.category.singular(), self.index + 1)
    }
}
