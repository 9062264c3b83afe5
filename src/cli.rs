// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The tool takes one or more documentation URLs as positional arguments plus
// a few options that control where and how the bundle is written.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "skills/moonbit-docs";

/// Section that gets split into one file per heading
pub const DEFAULT_SPLIT_SECTION: &str = "language/fundamentals.md";

/// Heading level used for splitting (3 = `###`)
pub const DEFAULT_HEADING_LEVEL: u8 = 3;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "moonbit-docs",
    version,
    about = "Split MoonBit documentation pages into a licensed skill bundle",
    long_about = "moonbit-docs downloads documentation pages that carry `<!-- path: ... -->` markers, \
                  splits them into one markdown file per section and writes them, together with a \
                  SKILL.md index, into a freshly cleared output directory."
)]
pub struct Cli {
    /// Documentation URLs to fetch, processed in the given order
    ///
    /// Not marked as required: an empty list is reported by the
    /// application itself with exit code 1
    pub urls: Vec<String>,

    /// Directory the bundle is written to (cleared first!)
    ///
    /// "", ".", ".." and filesystem roots are refused
    #[arg(short, long, env = "MOONBIT_DOCS_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Path of the section that is split by headings
    #[arg(long, default_value = DEFAULT_SPLIT_SECTION)]
    pub split_section: String,

    /// Heading level (number of `#`) used to split that section
    #[arg(long, default_value_t = DEFAULT_HEADING_LEVEL, value_parser = clap::value_parser!(u8).range(1..=6))]
    pub heading_level: u8,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print a JSON report instead of the summary line
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Renders the one-line usage string shown when no URLs are given
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is `urls` a Vec<String> and not required?
//    - clap would exit with code 2 for a missing required argument
//    - We want code 1 with a usage line, so we check for emptiness ourselves
//
// 2. What is ArgAction::Count?
//    - Counts how many times a flag appears: -vv gives 2
//
// 3. What does `env = "..."` do?
//    - If the flag is not given, clap reads the environment variable
//    - The default_value is only used when neither is present
// -----------------------------------------------------------------------------
