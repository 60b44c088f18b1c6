//! HTTP fetcher for downloading bogon lists.

use reqwest::Client;
use std::time::Duration;

use crate::error::UpdateError;

/// Maximum size for a single downloaded list (10 MB). The largest known bogon
/// list is well under 2 MB, so this is ample margin against a misbehaving
/// server feeding us garbage.
const MAX_LIST_SIZE: usize = 10 * 1024 * 1024;

/// HTTP client for fetching lists.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher with the given timeout and certificate policy.
    ///
    /// The timeout covers the full request lifecycle. Certificate
    /// verification is skipped only when explicitly disabled.
    pub fn new(timeout: Duration, verify_certs: bool) -> Result<Self, UpdateError> {
        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(!verify_certs)
            .user_agent(format!("bogonup/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpdateError::Config(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Download one list as text.
    ///
    /// Any network failure, non-success HTTP status, timeout, or over-size
    /// body fails the whole run: a single missing source would silently
    /// shrink a security-relevant blocklist, so there is no partial-source
    /// tolerance and no retry.
    pub async fn fetch(&self, url: &str) -> Result<String, UpdateError> {
        let fail = |reason: String| UpdateError::Download {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fail(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fail(format!("HTTP {status}")));
        }

        if let Some(len) = response.content_length() {
            if len as usize > MAX_LIST_SIZE {
                return Err(fail(format!(
                    "response too large: {len} bytes (max {MAX_LIST_SIZE})"
                )));
            }
        }

        let body = response.text().await.map_err(|e| fail(e.to_string()))?;

        if body.len() > MAX_LIST_SIZE {
            return Err(fail(format!(
                "response too large: {} bytes (max {MAX_LIST_SIZE})",
                body.len()
            )));
        }

        Ok(body)
    }
}
