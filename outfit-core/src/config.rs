//! Planner configuration at ~/.config/outfit-planner/config.toml

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::Deserialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::category::Category;
use crate::error::{OutfitError, OutfitResult};
use crate::item::ClothingItem;

/// Catalog lists as written in the config file. A missing list falls back
/// to the default catalog's list for that category.
#[derive(Deserialize, Clone, Default, Debug)]
pub struct CatalogConfig {
    pub tops: Option<Vec<String>>,
    pub bottoms: Option<Vec<String>>,
    pub accessories: Option<Vec<String>>,
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct PlannerConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl PlannerConfig {
    pub fn config_path() -> OutfitResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| OutfitError::Config("Could not determine config directory".into()))?
            .join("outfit-planner");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config from the default location, creating a commented-out
    /// template there first if none exists.
    pub fn load() -> OutfitResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load the config from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> OutfitResult<Self> {
        debug!(path = %path.display(), "Loading config");

        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .build()
            .map_err(|e| OutfitError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| OutfitError::Config(e.to_string()))
    }

    /// Parse config from TOML text.
    pub fn from_toml(contents: &str) -> OutfitResult<Self> {
        toml::from_str(contents).map_err(|e| OutfitError::Config(e.to_string()))
    }

    /// The catalog to plan with.
    pub fn catalog(&self) -> Catalog {
        let defaults = Catalog::default();

        Catalog::new(
            configured_or(&self.catalog.tops, defaults.items(Category::Tops)),
            configured_or(&self.catalog.bottoms, defaults.items(Category::Bottoms)),
            configured_or(&self.catalog.accessories, defaults.items(Category::Accessories)),
        )
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> OutfitResult<()> {
        let contents = "\
# outfit-planner configuration

# Items offered by the outfit wizard, as image paths or URLs.
# Leave a list out to use the built-in placeholders.
# [catalog]
# tops = [\"~/wardrobe/white-shirt.png\", \"~/wardrobe/blue-sweater.png\"]
# bottoms = [\"~/wardrobe/jeans.png\"]
# accessories = [\"~/wardrobe/scarf.png\"]
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                OutfitError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| OutfitError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn configured_or(configured: &Option<Vec<String>>, fallback: &[ClothingItem]) -> Vec<ClothingItem> {
    match configured {
        Some(items) => items.iter().cloned().map(ClothingItem::from).collect(),
        None => fallback.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_default_catalog() {
        let config = PlannerConfig::from_toml("").unwrap();
        assert_eq!(config.catalog(), Catalog::default());
    }

    #[test]
    fn configured_lists_replace_defaults() {
        let config = PlannerConfig::from_toml(
            r#"
            [catalog]
            tops = ["shirt.png", "hoodie.png"]
            accessories = []
            "#,
        )
        .unwrap();
        let catalog = config.catalog();

        assert_eq!(catalog.items(Category::Tops).len(), 2);
        assert_eq!(catalog.items(Category::Tops)[1].reference(), "hoodie.png");
        assert_eq!(
            catalog.items(Category::Bottoms),
            Catalog::default().items(Category::Bottoms)
        );
        assert!(catalog.items(Category::Accessories).is_empty());
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = PlannerConfig::from_toml("[catalog]\ntops = 3").unwrap_err();
        assert!(matches!(err, OutfitError::Config(_)));
    }

    #[test]
    fn default_file_loads_as_default_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        PlannerConfig::create_default_config(&path).unwrap();
        let config = PlannerConfig::load_from(&path).unwrap();

        assert_eq!(config.catalog(), Catalog::default());
    }

    #[test]
    fn load_from_reads_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[catalog]\nbottoms = [\"skirt.png\"]\n").unwrap();

        let catalog = PlannerConfig::load_from(&path).unwrap().catalog();
        assert_eq!(catalog.items(Category::Bottoms)[0].reference(), "skirt.png");
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PlannerConfig::load_from(&dir.path().join("nope.toml")).is_err());
    }
}
