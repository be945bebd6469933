//! tabscrape Networking
//!
//! Blocking HTTP GET for source pages. No retries or caching: a failure is
//! returned to the caller as-is.

mod loader;

pub use loader::{PageLoader, USER_AGENT};
pub use url::Url;

/// Fetch a URL and return its body as text
pub fn fetch(url: &str) -> Result<String, NetError> {
    PageLoader::new()?.fetch(url)
}

/// Network error
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP error {status} fetching {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
