// src/split/mod.rs
// =============================================================================
// This module turns raw documentation text into named pieces.
//
// Submodules:
// - sections: Splits text at `<!-- path: ... -->` markers
// - headings: Splits one section further at a fixed heading level
// - naming: Derives output filenames and heading slugs
//
// Everything in here is pure string processing: no I/O, no async.
// =============================================================================

mod headings;
mod naming;
mod sections;

pub use headings::split_by_heading;
pub use naming::filename_for_path;
pub use sections::{parse_sections, Section};

/// A file that will be written into the bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub filename: String,
    pub content: String,
}
