//! `lorebrief config` — Configuration management commands.

use lorebrief_config::BriefConfig;
use std::path::Path;

pub fn show(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config =
        BriefConfig::load(config_path).map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub fn path(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    // An explicit path is never replaced by defaults
    if let Some(explicit) = config_path {
        BriefConfig::require_file(explicit)?;
    }

    let path = BriefConfig::config_path(config_path);
    if path.is_file() {
        println!("{}", path.display());
    } else {
        println!("{} (not found, using defaults)", path.display());
    }
    Ok(())
}

pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", BriefConfig::default_toml());
    Ok(())
}
