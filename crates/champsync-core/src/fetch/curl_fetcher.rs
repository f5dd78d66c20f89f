//! libcurl-backed `HttpFetcher`.

use super::{FetchError, FetchOptions, HttpFetcher, HttpResponse};

const USER_AGENT: &str = concat!("champsync/", env!("CARGO_PKG_VERSION"));

/// Plain GET with redirects followed and bounded timeouts. One easy handle per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlFetcher {
    options: FetchOptions,
}

impl CurlFetcher {
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }
}

impl HttpFetcher for CurlFetcher {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.options.max_redirections)?;
        easy.useragent(USER_AGENT)?;
        easy.connect_timeout(self.options.connect_timeout)?;
        easy.timeout(self.options.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(url, status, bytes = body.len(), "GET finished");
        Ok(HttpResponse { status, body })
    }
}
