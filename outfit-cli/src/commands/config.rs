use std::path::Path;

use anyhow::Result;
use outfit_core::config::PlannerConfig;
use owo_colors::OwoColorize;

pub fn run(config_override: Option<&Path>) -> Result<()> {
    let config_path = match config_override {
        Some(path) => path.to_path_buf(),
        None => PlannerConfig::config_path()?,
    };

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    if !config_path.exists() {
        println!("  {}", "(not created yet, using built-in catalog)".dimmed());
    }

    Ok(())
}
