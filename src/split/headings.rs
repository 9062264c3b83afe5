// src/split/headings.rs
// =============================================================================
// Heading-based sub-splitting.
//
// One long section (the language fundamentals page) is more useful as
// several files. We cut it at every heading of one exact level, e.g. `###`,
// and name each piece after its heading.
//
// Rust concepts:
// - Iterators and windows over collected positions
// - Slicing strings by byte offsets (always at char boundaries here)
// =============================================================================

use regex::Regex;

use super::naming::{to_kebab, with_slug};
use super::OutputFile;

/// A heading line found in a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Text after the `#`s and the space
    pub title: String,
    /// Byte offset of the start of the heading line
    pub position: usize,
}

// Builds the pattern for exactly `level` hashes followed by a space
//
// `(?m)` makes ^ and $ match at line boundaries, `R` treats "\r\n" as a
// line ending so titles never end with '\r'.
fn heading_regex(level: u8) -> Regex {
    let pattern = format!(r"(?mR)^{} (.+)$", "#".repeat(usize::from(level)));
    Regex::new(&pattern).expect("valid regex")
}

/// Finds every heading of exactly `level` in `content`, in order.
pub fn find_headings(content: &str, level: u8) -> Vec<Heading> {
    heading_regex(level)
        .captures_iter(content)
        .filter_map(|caps| {
            Some(Heading {
                title: caps.get(1)?.as_str().to_string(),
                position: caps.get(0)?.start(),
            })
        })
        .collect()
}

// Splits `content` at headings of `level`
//
// Returns a single entry (the whole content under `base_filename`) when there
// are fewer than two headings. Otherwise one entry per heading, running up to
// the next heading, named "<base>-<slug>.md". Text before the first heading is
// not part of any entry in that case.
pub fn split_by_heading(content: &str, base_filename: &str, level: u8) -> Vec<OutputFile> {
    let headings = find_headings(content, level);

    if headings.len() <= 1 {
        return vec![OutputFile {
            filename: base_filename.to_string(),
            content: content.to_string(),
        }];
    }

    headings
        .iter()
        .enumerate()
        .map(|(i, heading)| {
            let end = headings
                .get(i + 1)
                .map(|next| next.position)
                .unwrap_or(content.len());

            OutputFile {
                filename: with_slug(base_filename, &to_kebab(&heading.title)),
                content: content[heading.position..end].trim().to_string(),
            }
        })
        .collect()
}
