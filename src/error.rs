use std::num::ParseIntError;
use std::time::Duration;

use thiserror::Error;

use crate::tools::locate::{Field, FieldNotFound};

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Document-level failures of a single scrape.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("unsupported source: {0}")]
    UnsupportedSource(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("could not parse recipe page: missing {0}")]
    Parse(Field),

    #[error("scrape cancelled")]
    Cancelled,
}

impl ScrapeError {
    /// Whether the caller may reasonably try the same URL again later.
    pub fn is_retryable(&self) -> bool {
        match self {
            ScrapeError::Fetch(e) => e.is_transient(),
            _ => false,
        }
    }
}

/* Locator misses surface as parse errors */
impl From<FieldNotFound> for ScrapeError {
    fn from(e: FieldNotFound) -> Self {
        ScrapeError::Parse(e.field)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build http client: {0}")]
    Client(String),

    #[error("http request failed: {0}")]
    Transport(String),

    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("status {status} ({reason})")]
    Status { status: u16, reason: &'static str },

    /// A refused response carrying a bot challenge page.
    #[error("blocked by bot challenge ({0})")]
    Blocked(&'static str),
}

impl FetchError {
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Transport(_) | FetchError::Timeout(_) => true,
            FetchError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            FetchError::Client(e.to_string())
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

/// A quantity run that is not a valid integer, e.g. `"2 1"` out of `"2 1/2 EL"`.
#[derive(Debug, Error)]
#[error("cannot read quantity from {input:?}: {source}")]
pub struct TokenizeError {
    pub input: String,
    #[source]
    pub source: ParseIntError,
}
