// src/bundle/output.rs
// =============================================================================
// Filesystem side of the bundle: clear the output directory, then write every
// planned file plus SKILL.md into it.
// =============================================================================

use anyhow::{bail, Context, Result};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use super::plan::Bundle;
use super::summary::{render_file, render_summary, SUMMARY_FILENAME};

// Removes `dir` with everything in it and creates it again (with parents)
//
// A directory that does not exist yet is fine; any other removal error
// aborts. Paths without a named component ("", ".", "..", "/") are refused
// before anything is deleted.
pub async fn reset_output_dir(dir: &Path) -> Result<()> {
    ensure_removable(dir)?;

    match fs::remove_dir_all(dir).await {
        Ok(()) => tracing::debug!(dir = %dir.display(), "removed previous output"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("failed to remove {}", dir.display()));
        }
    }

    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create {}", dir.display()))?;
    Ok(())
}

fn ensure_removable(dir: &Path) -> Result<()> {
    let named = dir
        .components()
        .any(|c| matches!(c, Component::Normal(_)));
    if !named {
        bail!("refusing to clear output directory '{}'", dir.display());
    }
    Ok(())
}

// Writes all section files, then SKILL.md
//
// Returns the paths written, SKILL.md last.
pub async fn write_bundle(dir: &Path, bundle: &Bundle) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(bundle.files.len() + 1);

    for file in &bundle.files {
        let path = dir.join(&file.filename);
        write_text(&path, &render_file(&file.content)).await?;
        written.push(path);
    }

    let summary_path = dir.join(SUMMARY_FILENAME);
    let summary = render_summary(bundle.introduction.as_deref(), &bundle.files);
    write_text(&summary_path, &summary).await?;
    written.push(summary_path);

    Ok(written)
}

async fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote file");
    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why tokio::fs instead of std::fs?
//    - We are inside an async runtime; tokio::fs runs the blocking calls
//      on a worker thread so the runtime is never stalled
//
// 2. What does `Err(e) if e.kind() == ErrorKind::NotFound` do?
//    - A match guard: the arm only matches when the condition holds
//    - "Nothing to delete" is success, every other error falls through
//
// 3. What is with_context?
//    - anyhow wraps the io::Error with a message naming the path
//    - The original error is kept as the cause
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::LICENSE_HEADER;
    use crate::split::OutputFile;

    #[tokio::test]
    async fn test_reset_creates_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("skills").join("moonbit-docs");

        reset_output_dir(&dir).await.unwrap();
        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn test_reset_removes_stale_files() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("out");
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        std::fs::write(dir.join("stale.md"), "old").unwrap();
        std::fs::write(dir.join("nested").join("deep.md"), "old").unwrap();

        reset_output_dir(&dir).await.unwrap();

        assert!(dir.is_dir());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_reset_fails_on_file_in_the_way() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        // Removing "blocker/out" fails with NotADirectory, not NotFound
        let result = reset_output_dir(&blocker.join("out")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_write_bundle() {
        let tmp = tempfile::tempdir().unwrap();
        let bundle = Bundle {
            files: vec![OutputFile {
                filename: "language-methods.md".to_string(),
                content: "# Methods".to_string(),
            }],
            introduction: Some("Intro".to_string()),
        };

        let written = write_bundle(tmp.path(), &bundle).await.unwrap();
        assert_eq!(written.len(), 2);
        assert!(written[1].ends_with(SUMMARY_FILENAME));

        let methods = std::fs::read_to_string(tmp.path().join("language-methods.md")).unwrap();
        assert_eq!(methods, format!("{}\n\n# Methods\n", LICENSE_HEADER));

        let summary = std::fs::read_to_string(tmp.path().join(SUMMARY_FILENAME)).unwrap();
        assert!(summary.contains("\nIntro\n"));
        assert!(summary.ends_with("- [language-methods.md](./language-methods.md)\n"));
    }

    #[tokio::test]
    async fn test_reset_refuses_unnamed_paths() {
        for dir in ["", ".", "./", "..", "/", "./.."] {
            let result = reset_output_dir(Path::new(dir)).await;
            assert!(result.is_err(), "expected '{}' to be refused", dir);
        }
    }
}
