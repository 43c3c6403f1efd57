// Document source trait: the seam between the pipeline and the network.
//
// The HTTP client is the only real implementation. Tests hand the pipeline
// canned documents through the same interface so nothing touches the
// network.

use anyhow::Result;
use async_trait::async_trait;

/// Anything that can turn a URL into the decoded text of a page.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Retrieve and decode the whole document at `url`.
    async fn fetch(&self, url: &str) -> Result<String>;
}
