// src/bundle/plan.rs
// =============================================================================
// Turns parsed sections into the list of files to write.
//
// Rules, applied to every section in order:
// - "language/index.md" is dropped
// - "language/introduction.md" is kept aside for SKILL.md
// - the split section is cut at headings, everything else is one file
// =============================================================================

use crate::split::{filename_for_path, split_by_heading, OutputFile, Section};

/// Top-level index page, never emitted
pub const INDEX_PATH: &str = "language/index.md";

/// Introduction page, becomes the body of SKILL.md
pub const INTRODUCTION_PATH: &str = "language/introduction.md";

/// Which section to split and at what heading level
#[derive(Debug, Clone)]
pub struct PlanOptions {
    pub split_section: String,
    pub heading_level: u8,
}

/// Files to write, in emission order, plus the introduction text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    pub files: Vec<OutputFile>,
    pub introduction: Option<String>,
}

pub fn plan_bundle(sections: &[Section], options: &PlanOptions) -> Bundle {
    let mut bundle = Bundle::default();

    for section in sections {
        match section.path.as_str() {
            INDEX_PATH => continue,
            INTRODUCTION_PATH => {
                // First introduction wins
                if bundle.introduction.is_none() {
                    bundle.introduction = Some(section.content.clone());
                }
                continue;
            }
            _ => {}
        }

        let base_filename = filename_for_path(&section.path);

        if section.path == options.split_section {
            bundle.files.extend(split_by_heading(
                &section.content,
                &base_filename,
                options.heading_level,
            ));
        } else {
            bundle.files.push(OutputFile {
                filename: base_filename,
                content: section.content.clone(),
            });
        }
    }

    bundle
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(path: &str, content: &str) -> Section {
        Section {
            path: path.to_string(),
            content: content.to_string(),
        }
    }

    fn options() -> PlanOptions {
        PlanOptions {
            split_section: "language/fundamentals.md".to_string(),
            heading_level: 3,
        }
    }

    fn filenames(bundle: &Bundle) -> Vec<&str> {
        bundle.files.iter().map(|f| f.filename.as_str()).collect()
    }

    #[test]
    fn test_skip_rules() {
        let sections = vec![
            section("language/index.md", "toc"),
            section("language/introduction.md", "Welcome to MoonBit."),
            section("language/methods.md", "# Methods"),
        ];
        let bundle = plan_bundle(&sections, &options());

        assert_eq!(filenames(&bundle), vec!["language-methods.md"]);
        assert_eq!(bundle.introduction.as_deref(), Some("Welcome to MoonBit."));
    }

    #[test]
    fn test_split_section_in_order() {
        let sections = vec![
            section("language/error_handling.md", "errors"),
            section("language/fundamentals.md", "### Functions\nf\n### Loops\nl"),
            section("toolchain/moon.md", "moon"),
        ];
        let bundle = plan_bundle(&sections, &options());

        assert_eq!(
            filenames(&bundle),
            vec![
                "language-error-handling.md",
                "language-fundamentals-functions.md",
                "language-fundamentals-loops.md",
                "toolchain-moon.md",
            ]
        );
        assert!(bundle.introduction.is_none());
    }

    #[test]
    fn test_other_sections_are_not_split() {
        let sections = vec![section("language/methods.md", "### A\na\n### B\nb")];
        let bundle = plan_bundle(&sections, &options());
        assert_eq!(bundle.files.len(), 1);
        assert_eq!(bundle.files[0].content, "### A\na\n### B\nb");
    }

    #[test]
    fn test_custom_split_section() {
        let opts = PlanOptions {
            split_section: "language/methods.md".to_string(),
            heading_level: 2,
        };
        let sections = vec![section("language/methods.md", "## A\na\n## B\nb")];
        let bundle = plan_bundle(&sections, &opts);
        assert_eq!(filenames(&bundle), vec!["language-methods-a.md", "language-methods-b.md"]);
    }
}
