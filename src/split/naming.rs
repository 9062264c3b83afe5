// src/split/naming.rs
// =============================================================================
// Filename derivation for sections and slugs for headings.
// =============================================================================

const MD_EXTENSION: &str = ".md";

// Maps a section path to a flat filename
//
// "language/foo_bar.md" -> "language-foo-bar.md"
//
// Two different paths can map to the same name; we don't guard against it.
pub fn filename_for_path(path: &str) -> String {
    let stem = path.strip_suffix(MD_EXTENSION).unwrap_or(path);
    format!("{}{}", stem.replace(['/', '_'], "-"), MD_EXTENSION)
}

/// Lowercase kebab-case slug of a heading title.
///
/// Characters outside `[a-z0-9]`, whitespace and `-` are dropped, then runs of
/// whitespace become a single hyphen.
pub fn to_kebab(heading: &str) -> String {
    let kept: String = heading
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    // split_whitespace also trims both ends
    kept.split_whitespace().collect::<Vec<_>>().join("-")
}

// Inserts "-<slug>" in front of the ".md" extension of `base`
//
// A base without ".md" is returned unchanged.
pub(crate) fn with_slug(base: &str, slug: &str) -> String {
    match base.strip_suffix(MD_EXTENSION) {
        Some(stem) => format!("{}-{}{}", stem, slug, MD_EXTENSION),
        None => base.to_string(),
    }
}
