//! # lorebrief core
//!
//! Gathers the game's interface definition, inventory definition and world
//! content files into one briefing report for a text-generation model.
//!
//! The pipeline is strictly sequential:
//! 1. read the interface definition file
//! 2. read the inventory definition file
//! 3. concatenate every matching file in the world directory
//! 4. render the fixed report template and write it once
//!
//! File contents are treated as opaque text throughout.

pub mod assembler;
pub mod error;
pub mod report;
pub mod source;

// Re-export key types at crate root for ergonomics
pub use assembler::{PromptAssembler, Sources};
pub use error::{Error, Result, SourceError};
pub use report::Report;
pub use source::{EntryOrder, aggregate_directory, matching_entries, read_text};
