//! Clothing categories, which double as the wizard's steps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OutfitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tops,
    Bottoms,
    Accessories,
}

impl Category {
    /// All categories in wizard order.
    pub const ALL: [Category; 3] = [Category::Tops, Category::Bottoms, Category::Accessories];

    /// Zero-based wizard step for this category.
    pub fn step_index(self) -> usize {
        match self {
            Category::Tops => 0,
            Category::Bottoms => 1,
            Category::Accessories => 2,
        }
    }

    pub fn from_step_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Wizard dialog title for the step choosing this category.
    pub fn title(self) -> &'static str {
        match self {
            Category::Tops => "Choose Tops",
            Category::Bottoms => "Choose Bottoms",
            Category::Accessories => "Choose Accessories",
        }
    }

    /// Heading used when displaying a planned outfit.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Tops => "Tops",
            Category::Bottoms => "Bottoms",
            Category::Accessories => "Accessories",
        }
    }

    /// Singular noun, used for item labels ("Top 1").
    pub fn singular(self) -> &'static str {
        match self {
            Category::Tops => "Top",
            Category::Bottoms => "Bottom",
            Category::Accessories => "Accessory",
        }
    }

    /// Whether an outfit must contain at least one item of this category.
    pub fn is_required(self) -> bool {
        !matches!(self, Category::Accessories)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Tops => write!(f, "tops"),
            Category::Bottoms => write!(f, "bottoms"),
            Category::Accessories => write!(f, "accessories"),
        }
    }
}

impl FromStr for Category {
    type Err = OutfitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tops" | "top" => Ok(Category::Tops),
            "bottoms" | "bottom" => Ok(Category::Bottoms),
            "accessories" | "accessory" => Ok(Category::Accessories),
            _ => Err(OutfitError::UnknownCategory(s.to_string())),
        }
    }
}
