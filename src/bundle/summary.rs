// src/bundle/summary.rs
// =============================================================================
// Text templates: the license header every file starts with and the SKILL.md
// index that links the whole bundle together.
// =============================================================================

use crate::split::OutputFile;

/// Name of the index file written next to the section files
pub const SUMMARY_FILENAME: &str = "SKILL.md";

/// Attribution block at the top of every generated file
pub const LICENSE_HEADER: &str = "\
<!-- Derived from MoonBit documentation by moonbitlang -->
<!-- https://github.com/moonbitlang/moonbit-docs -->
<!-- Prose content (post July 4, 2024): CC BY-SA 4.0 -->
<!-- Code examples: Apache 2.0 -->
<!-- Modifications: Extracted and reformatted as Claude Code skill files -->";

const FRONT_MATTER: &str = "\
---
name: moonbit-docs
description: MoonBit language reference covering syntax, types, functions, methods, and deriving. Use when writing MoonBit code, debugging MoonBit programs, or answering questions about MoonBit syntax and features.
---";

// Full text of a section file: header, blank line, content, newline
pub fn render_file(content: &str) -> String {
    format!("{}\n\n{}\n", LICENSE_HEADER, content)
}

// Full text of SKILL.md
//
// Parameters:
//   introduction: body text, empty when the introduction page was missing
//   files: every emitted section file, in emission order
pub fn render_summary(introduction: Option<&str>, files: &[OutputFile]) -> String {
    let links = files
        .iter()
        .map(|f| format!("- [{}](./{})", f.filename, f.filename))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n{}\n\n{}\n\n## Related Documentation\n\n{}\n",
        FRONT_MATTER,
        LICENSE_HEADER,
        introduction.unwrap_or(""),
        links
    )
}
