//! HTTP client wrapper for fetching the RFC index.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::Result;

/// User agent string identifying this tool.
const USER_AGENT: &str = concat!("ietfbib2bibtex/", env!("CARGO_PKG_VERSION"));

/// HTTP timeout in seconds.
///
/// The full RFC index is a multi-megabyte document, so allow a generous
/// timeout for slow connections.
const HTTP_TIMEOUT_SECS: u64 = 60;

/// Create a configured HTTP client.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Download a document from a URL as text.
///
/// There is no retry: an unreachable remote or a non-success status is fatal
/// for the bibliography being generated.
pub fn download_string(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send()?.error_for_status()?;
    Ok(response.text()?)
}
