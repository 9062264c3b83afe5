// src/bundle/mod.rs
// =============================================================================
// This module decides which files make up the skill bundle and writes them.
//
// Submodules:
// - plan: Applies the skip rules and the heading split to all sections
// - summary: License header and the SKILL.md index
// - output: Clears the output directory and writes files into it
// =============================================================================

mod output;
mod plan;
mod summary;

pub use output::{reset_output_dir, write_bundle};
pub use plan::{plan_bundle, PlanOptions, INTRODUCTION_PATH};
pub use summary::SUMMARY_FILENAME;

#[cfg(test)]
pub use summary::LICENSE_HEADER;
