// HTTP client for ebook pages: a thin reqwest wrapper.
//
// One GET per submitted URL. The whole body is read and decoded before
// returning; there is no streaming and no retry.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, info};

use super::traits::DocumentSource;

/// User agent sent with every request unless overridden in config.
pub const DEFAULT_USER_AGENT: &str = "wordrank/0.1 (word-frequency indexer)";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Check that `url` parses and uses http or https.
pub fn validate_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url.trim()).with_context(|| format!("Not a valid URL: {url}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => anyhow::bail!("Unsupported URL scheme '{other}' (expected http or https)"),
    }
}

/// Unauthenticated HTTP client for public text archives.
pub struct PageClient {
    client: reqwest::Client,
}

impl PageClient {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl DocumentSource for PageClient {
    async fn fetch(&self, url: &str) -> Result<String> {
        let url = validate_url(url)?;

        debug!(url = %url, "GET request");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Request failed: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("{url} returned {status}");
        }

        // reqwest decodes using the charset from Content-Type, falling back to UTF-8
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {url}"))?;

        info!(url = %url, bytes = text.len(), "Fetched document");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_http_and_https() {
        assert!(validate_url("https://www.gutenberg.org/cache/epub/2701/pg2701.txt").is_ok());
        assert!(validate_url("http://example.com/book.txt").is_ok());
        assert!(validate_url("  https://example.com/padded.txt  ").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_garbage() {
        assert!(validate_url("").is_err());
        assert!(validate_url("not a url").is_err());
        assert!(validate_url("www.gutenberg.org/ebooks/2701").is_err());
    }

    #[test]
    fn test_validate_url_rejects_other_schemes() {
        let err = validate_url("ftp://example.com/book.txt").unwrap_err();
        assert!(err.to_string().contains("ftp"));
        assert!(validate_url("file:///etc/passwd").is_err());
    }

    #[test]
    fn test_client_builds() {
        assert!(PageClient::new(DEFAULT_USER_AGENT, Duration::from_secs(DEFAULT_TIMEOUT_SECS)).is_ok());
    }
}
