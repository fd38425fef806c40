use anyhow::Result;
use outfit_core::{Catalog, CatalogItem, Category};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(catalog: &Catalog, category: Option<Category>, json: bool) -> Result<()> {
    let categories: Vec<Category> = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };

    if json {
        let items: Vec<CatalogItem> = categories
            .iter()
            .flat_map(|c| catalog.entries(*c))
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    for category in categories {
        println!("{}", category.heading().bold());
        let entries = catalog.entries(category);
        if entries.is_empty() {
            println!("  {}", "(empty)".dimmed());
        }
        for entry in entries {
            println!("  {}", entry.render());
        }
    }

    Ok(())
}
