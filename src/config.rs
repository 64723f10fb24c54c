use anyhow::{Context, Result};
use std::time::Duration;

/// JSON-RPC endpoint used by the DeepL iOS app
pub const DEFAULT_ENDPOINT: &str = "https://www2.deepl.com/jsonrpc";

#[derive(Debug, Clone)]
pub struct Config {
    /// Where requests are posted. Only tests and proxies change this.
    pub endpoint: String,

    /// Whole-request timeout for the HTTP client. `None` leaves the
    /// transport's own behavior in place.
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let request_timeout = match std::env::var("DEEPLX_TIMEOUT_SECS") {
            Ok(value) => Some(Duration::from_secs(
                value
                    .trim()
                    .parse()
                    .with_context(|| format!("DEEPLX_TIMEOUT_SECS is not a number: {:?}", value))?,
            )),
            Err(_) => None,
        };

        Ok(Self {
            endpoint: std::env::var("DEEPLX_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            request_timeout,
        })
    }

    /// Build the HTTP client used for translation calls.
    ///
    /// Header names go out title-cased on HTTP/1, as the iOS client sends them.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().http1_title_case_headers();
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().context("Failed to build HTTP client")
    }
}
