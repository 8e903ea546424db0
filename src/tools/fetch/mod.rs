mod client;
mod headers;
mod utils;

pub mod types;

// Re-export types for public use
pub use types::*;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_ENCODING, CONTENT_TYPE};
use reqwest::Client;
use std::time::Instant;
use tracing::debug;

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::types::ScrapeTarget;
use client::build_client;
use headers::headers_for_config;
use utils::{challenge_marker, may_be_challenge, validate_status};

/// Network boundary of a scrape: one GET per call, no retries.
#[async_trait]
pub trait Fetcher: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetch the target. The returned result owns the connection lease; any
    /// error path has already released it.
    async fn fetch(&self, target: &ScrapeTarget) -> Result<FetchResult, FetchError>;

    /// Responses currently held open by this fetcher.
    fn in_flight(&self) -> usize;
}

/// [`Fetcher`] backed by a pooled `reqwest` client.
///
/// The pool is shared between concurrent calls; every call gets its own
/// request and response.
pub struct ReqwestFetcher {
    client: Client,
    headers: HeaderMap,
    in_flight: InFlight,
}

impl ReqwestFetcher {
    pub fn new(cfg: &FetchConfig) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(cfg)?,
            headers: headers_for_config(cfg),
            in_flight: InFlight::new(),
        })
    }
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    async fn fetch(&self, target: &ScrapeTarget) -> Result<FetchResult, FetchError> {
        let start = Instant::now();
        let lease = self.in_flight.lease();

        let response = self
            .client
            .get(target.url().clone())
            .headers(self.headers.clone())
            .send()
            .await?;

        let status = response.status();
        debug!(url = %target.url(), status = status.as_u16(), "response received");
        if let Err(err) = validate_status(status) {
            if may_be_challenge(status) {
                let body = response.text().await.unwrap_or_default();
                if let Some(marker) = challenge_marker(&body) {
                    return Err(FetchError::Blocked(marker));
                }
            }
            return Err(err);
        }

        let content_encoding = header_string(response.headers(), CONTENT_ENCODING);
        let content_type = header_string(response.headers(), CONTENT_TYPE);
        let final_url = response.url().to_string();
        let body = response.bytes().await?.to_vec();

        Ok(FetchResult {
            status: status.as_u16(),
            body,
            content_encoding,
            content_type,
            final_url,
            duration_ms: start.elapsed().as_millis() as u64,
            lease,
        })
    }

    fn in_flight(&self) -> usize {
        self.in_flight.count()
    }
}

fn header_string(headers: &HeaderMap, name: reqwest::header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}
