//! Transport-level failure of a GET.

use std::fmt;

/// The request never produced an HTTP response (bad URL, DNS, connect, timeout, reset).
#[derive(Debug)]
pub enum FetchError {
    /// Curl reported an error while setting up or performing the transfer.
    Curl(curl::Error),
    /// Transport failure reported by a non-curl fetcher.
    Other(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Curl(e) => write!(f, "{}", e),
            FetchError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Curl(e) => Some(e),
            FetchError::Other(_) => None,
        }
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Curl(e)
    }
}
