//! Prompt assembly. Loads every source, then emits the report in one write.
//!
//! Loads run in strict order (interface, inventory, world). Emission only
//! starts once all three have succeeded, so a failed load never leaves a
//! partial report on the output stream.

use crate::error::{Error, Result};
use crate::report::Report;
use crate::source::{self, EntryOrder};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// The source locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    /// Interface definition file.
    pub interface: PathBuf,
    /// Inventory definition file.
    pub inventory: PathBuf,
    /// Directory holding the world content files.
    pub world_dir: PathBuf,
    /// File-name suffix selecting world content files (e.g. `.go`).
    pub suffix: String,
    pub order: EntryOrder,
}

/// Builds and emits the briefing report for a set of sources.
pub struct PromptAssembler {
    sources: Sources,
}

impl PromptAssembler {
    pub fn new(sources: Sources) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> &Sources {
        &self.sources
    }

    /// Load all three sources into a report.
    pub fn assemble(&self) -> Result<Report> {
        let interface = source::read_text(&self.sources.interface)?;
        let inventory = source::read_text(&self.sources.inventory)?;
        let world = source::aggregate_directory(
            &self.sources.world_dir,
            &self.sources.suffix,
            self.sources.order,
        )?;

        Ok(Report::new(interface, inventory, world))
    }

    /// Assemble the report and write it to `out`.
    pub fn emit<W: Write>(&self, out: &mut W) -> Result<()> {
        let text = self.assemble()?.render();
        out.write_all(text.as_bytes()).map_err(Error::Output)?;
        out.flush().map_err(Error::Output)?;
        debug!(bytes = text.len(), "Report emitted");
        Ok(())
    }
}
