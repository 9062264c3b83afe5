// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing) on stderr
// 3. Run the fetch → split → write pipeline
// 4. Exit with proper code (0 = success, 1 = usage/fetch error, 2 = other error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod bundle;   // src/bundle/ - skip rules, templates, file output
mod cli;      // src/cli.rs - command-line parsing
mod fetch;    // src/fetch/ - downloading pages
mod pipeline; // src/pipeline.rs - the run itself
mod split;    // src/split/ - sections, headings, filenames

use anyhow::Result;
use clap::Parser;
use std::time::Duration;

use bundle::PlanOptions;
use cli::Cli;
use fetch::FetchError;
use pipeline::{RunConfig, RunReport};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so stdout only carries the report
//
// RUST_LOG overrides the -v based default.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match verbose {
        0 => "moonbit_docs=warn",
        1 => "moonbit_docs=info",
        2 => "moonbit_docs=debug",
        _ => "moonbit_docs=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// This is the main application logic
// Returns:
//   Ok(0) = bundle written
//   Ok(1) = no URLs given, or a page could not be fetched
//   Err = unexpected error (filesystem, network, ...)
async fn run(cli: Cli) -> Result<i32> {
    if cli.urls.is_empty() {
        eprintln!("{}", cli::usage());
        return Ok(1);
    }

    let json = cli.json;
    let config = RunConfig {
        urls: cli.urls,
        output_dir: cli.output_dir,
        plan: PlanOptions {
            split_section: cli.split_section,
            heading_level: cli.heading_level,
        },
        timeout: cli.timeout.map(Duration::from_secs),
    };

    match pipeline::run_pipeline(&config).await {
        Ok(report) => {
            print_report(&report, json)?;
            Ok(0)
        }
        Err(e) => match e.downcast_ref::<FetchError>() {
            // "Failed to fetch <url>: <status> <reason>"
            Some(fetch_error) if matches!(fetch_error, FetchError::Status { .. }) => {
                eprintln!("{}", fetch_error);
                Ok(1)
            }
            _ => Err(e),
        },
    }
}

// Prints the report either as a summary line or JSON
fn print_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        println!("Generated {} files in {}", report.total_files, report.output_dir);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_no_urls_exits_with_one_without_touching_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");
        let cli = Cli::try_parse_from(["moonbit-docs", "--output-dir", out.to_str().unwrap()]).unwrap();

        assert_eq!(run(cli).await.unwrap(), 1);
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_not_found_exits_with_one() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");
        let url = format!("{}/llms-full.txt", server.uri());
        let cli = Cli::try_parse_from(["moonbit-docs", "-o", out.to_str().unwrap(), url.as_str()]).unwrap();

        assert_eq!(run(cli).await.unwrap(), 1);
        assert!(out.is_dir());
        assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_success_exits_with_zero() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<!-- path: language/methods.md -->\n# Methods\n"))
            .mount(&server)
            .await;

        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");
        let url = server.uri();
        let cli = Cli::try_parse_from(["moonbit-docs", "--json", "-o", out.to_str().unwrap(), url.as_str()]).unwrap();

        assert_eq!(run(cli).await.unwrap(), 0);
        assert!(out.join("language-methods.md").is_file());
        assert!(out.join("SKILL.md").is_file());
    }

    #[tokio::test]
    async fn test_invalid_url_is_an_unexpected_error() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");
        let cli = Cli::try_parse_from(["moonbit-docs", "-o", out.to_str().unwrap(), "::nope::"]).unwrap();

        assert!(run(cli).await.is_err());
    }
}
