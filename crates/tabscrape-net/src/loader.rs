//! Page Loader
//!
//! Thin wrapper over a blocking reqwest client.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::{NetError, Url};

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("tabscrape/", env!("CARGO_PKG_VERSION"));

/// Load pages from the network
pub struct PageLoader {
    client: Client,
}

impl PageLoader {
    pub fn new() -> Result<Self, NetError> {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Loader with a whole-request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, NetError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a URL with GET, failing on non-2xx status
    pub fn fetch(&self, url: &str) -> Result<String, NetError> {
        let parsed = parse_url(url)?;
        tracing::info!("HTTP GET {}", parsed);

        let response = self.client.get(parsed).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text()?;
        tracing::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

/// Parse and check an absolute http(s) URL
pub(crate) fn parse_url(url: &str) -> Result<Url, NetError> {
    let parsed = Url::parse(url).map_err(|e| NetError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(NetError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {other}"),
        }),
    }
}
