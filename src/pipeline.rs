// src/pipeline.rs
// =============================================================================
// The whole run in one place:
//
// 1. Clear and recreate the output directory
// 2. Fetch every URL in order and parse its sections
// 3. Plan the bundle (skip rules, heading split)
// 4. Write the files and SKILL.md
//
// All intermediate state is passed along as values; nothing is global.
// =============================================================================

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::bundle::{self, PlanOptions};
use crate::fetch;
use crate::split::{self, Section};

/// Everything a run needs, resolved from the command line
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub urls: Vec<String>,
    pub output_dir: PathBuf,
    pub plan: PlanOptions,
    pub timeout: Option<Duration>,
}

/// What a successful run produced
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Directory the bundle was written to
    pub output_dir: String,
    /// Names of the section files, in emission order (SKILL.md excluded)
    pub files: Vec<String>,
    /// Path of the generated SKILL.md
    pub summary_file: String,
    /// Section files plus SKILL.md
    pub total_files: usize,
}

pub async fn run_pipeline(config: &RunConfig) -> Result<RunReport> {
    bundle::reset_output_dir(&config.output_dir).await?;

    let client = fetch::build_client(config.timeout)?;

    let mut sections: Vec<Section> = Vec::new();
    for url in &config.urls {
        let text = fetch::fetch_page(&client, url).await?;
        let parsed = split::parse_sections(&text);
        tracing::info!(url = url.as_str(), sections = parsed.len(), "parsed sections");
        sections.extend(parsed);
    }

    let planned = bundle::plan_bundle(&sections, &config.plan);
    if planned.introduction.is_none() {
        tracing::warn!(path = bundle::INTRODUCTION_PATH, "introduction section not found");
    }

    let written = bundle::write_bundle(&config.output_dir, &planned).await?;

    Ok(RunReport {
        output_dir: config.output_dir.display().to_string(),
        files: planned.files.into_iter().map(|f| f.filename).collect(),
        summary_file: config.output_dir.join(bundle::SUMMARY_FILENAME).display().to_string(),
        total_files: written.len(),
    })
}
