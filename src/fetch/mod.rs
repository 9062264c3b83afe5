// src/fetch/mod.rs
// =============================================================================
// This module downloads the documentation pages.
//
// Submodules:
// - http: Builds the HTTP client and performs one GET per URL
//
// Pages are fetched one after another, in the order given on the command
// line. The first failure stops the run.
// =============================================================================

mod http;

pub use http::{build_client, fetch_page, FetchError};
