//! Scrape Orchestrator
//!
//! `url → allowlist → fetch → parse → locate → extract → RecipeRecord`.
//! A [`Scraper`] holds only shared, immutable parts (the fetcher and the
//! adapter registry); every call owns its own request, response and
//! document, so concurrent calls never see each other's state.


use std::sync::Arc;
use std::time::Duration;

use scraper::Html;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::adapters::{AdapterRegistry, SiteAdapter};
use crate::config::FetchConfig;
use crate::error::{FetchError, Result, ScrapeError};
use crate::tools::extract::{directions, extract_text, ingredients};
use crate::tools::fetch::{FetchResult, Fetcher, ReqwestFetcher};
use crate::tools::locate::Field;
use crate::types::{DietType, MealType, RecipeRecord, ScrapeTarget};

/// Per-call deadline and cancellation signal.
#[derive(Debug, Clone, Default)]
pub struct ScrapeOptions {
    /// Upper bound on the fetch step.
    pub timeout: Option<Duration>,
    pub cancel: CancellationToken,
}

impl ScrapeOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}

#[derive(Clone)]
pub struct Scraper {
    fetcher: Arc<dyn Fetcher>,
    registry: AdapterRegistry,
}

impl Scraper {
    pub fn new(fetcher: Arc<dyn Fetcher>, registry: AdapterRegistry) -> Self {
        Self { fetcher, registry }
    }

    /// `reqwest` fetcher plus every built-in adapter.
    pub fn with_defaults(cfg: &FetchConfig) -> Result<Self> {
        let fetcher = ReqwestFetcher::new(cfg)?;
        Ok(Self::new(Arc::new(fetcher), AdapterRegistry::with_defaults()))
    }

    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    pub fn fetcher(&self) -> &dyn Fetcher {
        self.fetcher.as_ref()
    }

    pub async fn scrape(&self, url: &str) -> Result<RecipeRecord> {
        self.scrape_with(url, &ScrapeOptions::default()).await
    }

    /// Scrape one recipe page.
    ///
    /// Unsupported hosts fail before any network call. The response is held
    /// until extraction finishes and released on every exit path, including
    /// cancellation and deadline expiry.
    pub async fn scrape_with(&self, url: &str, opts: &ScrapeOptions) -> Result<RecipeRecord> {
        let target = ScrapeTarget::parse(url)?;
        let adapter = self
            .registry
            .get(target.host())
            .cloned()
            .ok_or_else(|| ScrapeError::UnsupportedSource(target.host().0.clone()))?;

        if opts.cancel.is_cancelled() {
            return Err(ScrapeError::Cancelled);
        }

        let fetched = self.fetch(&target, opts).await?;
        debug!(
            url = %target.url(),
            adapter = adapter.name(),
            bytes = fetched.body.len(),
            duration_ms = fetched.duration_ms,
            "page fetched"
        );

        let record = parse_recipe(adapter.as_ref(), &fetched.text());
        drop(fetched);

        let record = record?;
        info!(
            host = %target.host(),
            ingredients = record.ingredients.len(),
            directions = record.directions.len(),
            "recipe scraped"
        );
        Ok(record)
    }

    async fn fetch(&self, target: &ScrapeTarget, opts: &ScrapeOptions) -> Result<FetchResult> {
        let fetch = self.fetcher.fetch(target);
        let bounded = async {
            match opts.timeout {
                Some(limit) => match tokio::time::timeout(limit, fetch).await {
                    Ok(res) => res,
                    Err(_) => Err(FetchError::Timeout(limit)),
                },
                None => fetch.await,
            }
        };

        tokio::select! {
            biased;
            _ = opts.cancel.cancelled() => Err(ScrapeError::Cancelled),
            res = bounded => res.map_err(ScrapeError::from),
        }
    }
}

/// Build a record from an already fetched page using `adapter`'s locator rules.
pub fn parse_recipe(adapter: &dyn SiteAdapter, html: &str) -> Result<RecipeRecord> {
    let doc = Html::parse_document(html);
    let fields = adapter.locate(&doc)?;

    let name = extract_text(&fields.title);
    if name.is_empty() {
        return Err(ScrapeError::Parse(Field::Title));
    }

    // Classification is not inferred from the page yet.
    Ok(RecipeRecord {
        name,
        description: extract_text(&fields.description),
        diet_type: DietType::default(),
        meal_type: MealType::default(),
        tags: Default::default(),
        ingredients: ingredients(fields.ingredients),
        directions: directions(fields.directions),
    })
}
