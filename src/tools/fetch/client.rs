use crate::config::FetchConfig;
use crate::error::FetchError;
use reqwest::{redirect, Client};
use std::time::Duration;

const POOL_IDLE_TIMEOUT_SEC: u64 = 90;
const POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Build the pooled client shared by every fetch of one fetcher.
pub(crate) fn build_client(cfg: &FetchConfig) -> Result<Client, FetchError> {
    let builder = Client::builder()
        .cookie_store(true)
        .redirect(redirect::Policy::limited(cfg.redirect_limit))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(Duration::from_millis(cfg.timeout_ms))
        .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SEC))
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST);

    let builder = if cfg.use_system_proxy {
        builder
    } else {
        builder.no_proxy()
    };

    builder
        .build()
        .map_err(|e| FetchError::Client(e.to_string()))
}
