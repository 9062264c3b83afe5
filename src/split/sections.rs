// src/split/sections.rs
// =============================================================================
// Marker-based sectioning.
//
// The documentation pages embed comments like
//
//     <!-- path: language/fundamentals.md -->
//
// in front of every logical page. We cut the text at those markers and keep
// the captured path together with the (trimmed) text that follows it.
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;

/// Literal opening of a marker comment
const MARKER_OPEN: &str = "<!-- path:";

static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!-- path: (.+?) -->").expect("valid regex"));

/// One marker-delimited piece of a documentation page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The value captured from the marker, e.g. "language/introduction.md"
    pub path: String,
    /// Trimmed text between this marker and the next one
    pub content: String,
}

// Marker path plus the byte offset right after the marker comment
struct MarkerMatch<'a> {
    path: &'a str,
    end: usize,
}

// Splits `text` into sections, in the order the markers appear
//
// A section's content ends where the last `<!-- path:` token starting at or
// before the next marker's end begins. For well-formed input that is simply
// the next marker's start.
//
// Example:
//   "<!-- path: a.md -->X<!-- path: b.md -->Y"
//   -> [Section { path: "a.md", content: "X" }, Section { path: "b.md", content: "Y" }]
pub fn parse_sections(text: &str) -> Vec<Section> {
    let markers: Vec<MarkerMatch<'_>> = MARKER_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let path = caps.get(1)?;
            Some(MarkerMatch {
                path: path.as_str(),
                end: whole.end(),
            })
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let start = marker.end;
            // The next marker's own token always lies in start..=next.end
            let end = match markers.get(i + 1) {
                Some(next) => last_marker_open_between(text, start, next.end).unwrap_or(start),
                None => text.len(),
            };

            Section {
                path: marker.path.to_string(),
                content: text[start..end].trim().to_string(),
            }
        })
        .collect()
}

// Byte offset of the last `<!-- path:` occurrence starting in `from..=limit`
//
// `from` must be a char boundary. Scanning starts there, so each section
// only looks at its own stretch of text.
fn last_marker_open_between(text: &str, from: usize, limit: usize) -> Option<usize> {
    text[from..]
        .match_indices(MARKER_OPEN)
        .map(|(idx, _)| from + idx)
        .take_while(|&idx| idx <= limit)
        .last()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is LazyLock?
//    - A static that is built the first time it is used
//    - Compiling a Regex is expensive, so we do it once per process
//
// 2. Why byte offsets?
//    - Rust strings are UTF-8; slicing with text[a..b] takes byte positions
//    - Regex matches and match_indices both report byte positions at
//      character boundaries, so slicing with them never panics
//
// 3. What does MarkerMatch<'a> mean?
//    - The struct borrows the path straight out of `text`
//    - The lifetime 'a says it cannot outlive the text it points into
// -----------------------------------------------------------------------------
