//! `lorebrief sources` — List the files a build would read.

use lorebrief_config::BriefConfig;
use lorebrief_core::{EntryOrder, SourceError, Sources, matching_entries};
use std::path::{Path, PathBuf};

pub fn run(config_path: Option<&Path>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = BriefConfig::load(config_path)?;
    let sources = config.sources();

    if json {
        let doc = describe(&sources)?;
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print!("{}", render(&sources)?);
    }

    Ok(())
}

fn order_name(order: EntryOrder) -> &'static str {
    match order {
        EntryOrder::Sorted => "sorted",
        EntryOrder::Listing => "listing",
    }
}

/// Matching world files, or `None` when the world directory itself is
/// missing or unlistable.
fn world_files(sources: &Sources) -> Result<Option<Vec<PathBuf>>, SourceError> {
    match matching_entries(&sources.world_dir, &sources.suffix, sources.order) {
        Ok(files) => Ok(Some(files)),
        Err(e) if e.path() == sources.world_dir.as_path() => {
            tracing::debug!(dir = %e.path().display(), error = %e, "World directory unavailable");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// JSON description of every source, world files in aggregation order.
fn describe(sources: &Sources) -> Result<serde_json::Value, SourceError> {
    let listing = world_files(sources)?;
    let files: Vec<String> = listing
        .iter()
        .flatten()
        .map(|p| p.display().to_string())
        .collect();

    Ok(serde_json::json!({
        "interface": {
            "path": sources.interface.display().to_string(),
            "exists": sources.interface.is_file(),
        },
        "inventory": {
            "path": sources.inventory.display().to_string(),
            "exists": sources.inventory.is_file(),
        },
        "world": {
            "dir": sources.world_dir.display().to_string(),
            "exists": listing.is_some(),
            "suffix": sources.suffix,
            "order": order_name(sources.order),
            "files": files,
        }
    }))
}

fn render(sources: &Sources) -> Result<String, SourceError> {
    let listing = world_files(sources)?;
    let mark = |exists: bool| if exists { "" } else { "  (missing)" };

    let mut out = String::new();
    out.push_str(&format!(
        "Interface:  {}{}\n",
        sources.interface.display(),
        mark(sources.interface.is_file())
    ));
    out.push_str(&format!(
        "Inventory:  {}{}\n",
        sources.inventory.display(),
        mark(sources.inventory.is_file())
    ));
    out.push_str(&format!(
        "World:      {}{} (*{}, {}, {} file(s))\n",
        sources.world_dir.display(),
        mark(listing.is_some()),
        sources.suffix,
        order_name(sources.order),
        listing.as_ref().map_or(0, Vec::len)
    ));
    for path in listing.iter().flatten() {
        out.push_str(&format!("  - {}\n", path.display()));
    }
    Ok(out)
}
