// src/fetch/http.rs
// =============================================================================
// This module fetches page bodies over HTTP(S).
//
// Key functionality:
// - One shared reqwest Client (connection pooling, user agent)
// - A single GET per URL, no retries
// - Non-2xx statuses become a typed error carrying the status text
//
// Rust concepts:
// - async/await: For network I/O
// - thiserror: Deriving std::error::Error for our own enum
// =============================================================================

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// User agent string identifying this tool
const USER_AGENT: &str = concat!("moonbit-docs/", env!("CARGO_PKG_VERSION"));

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Everything that can go wrong while fetching one page
#[derive(Debug, Error)]
pub enum FetchError {
    /// The argument is not a valid absolute URL
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The server answered, but not with a 2xx status
    #[error("Failed to fetch {url}: {}", status_text(.status, .reason))]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    /// The request itself failed (DNS, TLS, timeout, body decoding...)
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

// "404 Not Found", or just "599" when the code has no reason phrase
fn status_text(status: &u16, reason: &str) -> String {
    if reason.is_empty() {
        status.to_string()
    } else {
        format!("{} {}", status, reason)
    }
}

// Creates the HTTP client used for every page
//
// Parameters:
//   timeout: optional per-request timeout; None means wait as long as it takes
pub fn build_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

// Downloads one page and returns its body as text
//
// Returns:
//   Ok(body) for any 2xx status
//   Err(FetchError::Status) for everything else, with the canonical
//   reason phrase (e.g. "Not Found") as status text
//
// The body is decoded as UTF-8 (invalid sequences become U+FFFD) and a
// leading byte order mark is dropped.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!(url = %parsed, "fetching page");

    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
        });
    }

    // Always UTF-8, whatever charset the Content-Type claims
    let bytes = response.bytes().await.map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;
    let body = decode_utf8(&bytes);

    tracing::info!(url, status = status.as_u16(), bytes = body.len(), "fetched page");
    Ok(body)
}

fn decode_utf8(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why bytes() instead of text()?
//    - reqwest's text() picks the decoder from the Content-Type charset
//    - Our pages are always UTF-8, so we decode the raw bytes ourselves
//
// 2. What does from_utf8_lossy return?
//    - A Cow<str>: borrowed when the bytes were valid, owned when some
//      bytes had to be replaced
//    - .into_owned() turns either case into a String
//
// 3. What is #[source]?
//    - Tells thiserror which field is the underlying error
//    - anyhow prints the whole chain with {:#}
// -----------------------------------------------------------------------------
