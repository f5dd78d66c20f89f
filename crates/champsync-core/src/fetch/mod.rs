//! Blocking HTTP GET used for the manifest and for each icon.
//!
//! `HttpFetcher` is the seam the synchronizer talks to; `CurlFetcher` is the
//! libcurl-backed implementation used by the CLI.

mod curl_fetcher;
mod error;

use std::time::Duration;

pub use curl_fetcher::CurlFetcher;
pub use error::FetchError;

/// Status and body of a completed GET. Any status is a completed response;
/// only transport failures are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one blocking GET and returns whatever the server answered.
pub trait HttpFetcher {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// Per-request limits applied by `CurlFetcher`.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub max_redirections: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(60),
            max_redirections: 10,
        }
    }
}
