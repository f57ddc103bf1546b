//! Config command implementation

use a2site_core::{BinaryLocator, ConfigManager};
use anyhow::Result;

use crate::output::OutputContext;
use crate::ExitCode;

pub fn show(config: &ConfigManager, ctx: &OutputContext) -> Result<ExitCode> {
    let settings = config.load()?;
    let locator = BinaryLocator::from_settings(&settings);

    if ctx.json {
        ctx.json(&serde_json::json!({
            "config_path": config.config_path(),
            "settings": settings,
            "effective_search_paths": locator.search_paths(),
        }))?;
    } else {
        println!("Configuration:");
        println!("  Config file: {}", config.config_path().display());
        println!();
        println!("Settings:");
        println!("  enable_binary: {}", settings.enable_binary);
        println!("  disable_binary: {}", settings.disable_binary);
        println!("  include_system_paths: {}", settings.include_system_paths);
        println!("  search_paths: {}", settings.search_paths.len());
        for path in &settings.search_paths {
            println!("    {}", path.display());
        }
        println!();
        println!("Effective search order:");
        for path in locator.search_paths() {
            println!("  {}", path.display());
        }
    }

    Ok(ExitCode::Success)
}
