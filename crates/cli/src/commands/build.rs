//! `lorebrief build` — Assemble the report and print it.

use lorebrief_config::BriefConfig;
use lorebrief_core::PromptAssembler;
use std::path::Path;

pub fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = BriefConfig::load(config_path)?;
    let assembler = PromptAssembler::new(config.sources());

    tracing::debug!(sources = ?assembler.sources(), "Building report");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    assembler.emit(&mut out)?;

    Ok(())
}
