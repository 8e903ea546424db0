//! Public facade
//!
//! Thin wrappers over [`Scraper`] that record each call in the activity log.

use std::time::Instant;

use crate::activity::ActivityLogger;
use crate::error::Result;
use crate::runtime;
use crate::tools::batch::batch;
use crate::tools::scrape::{ScrapeOptions, Scraper};
use crate::types::{Domain, RecipeRecord};

#[cfg(not(test))]
fn activity_logger() -> std::io::Result<ActivityLogger> {
    ActivityLogger::new()
}

// Unit tests keep the user's activity log untouched.
#[cfg(test)]
fn activity_logger() -> std::io::Result<ActivityLogger> {
    Ok(ActivityLogger::at(std::env::temp_dir().join(format!(
        "recipe-scraper-api-{}.log",
        std::process::id()
    ))))
}

// Logging failures never fail the scrape itself.
fn log_info(host: Option<&str>, event: &str, details: &str) {
    if let Ok(logger) = activity_logger() {
        let _ = logger.info(host, event, Some(details));
    }
}

fn log_error(host: Option<&str>, event: &str, details: &str) {
    if let Ok(logger) = activity_logger() {
        let _ = logger.error(host, event, Some(details));
    }
}

fn host_of(url: &str) -> Option<String> {
    url::Url::parse(url.trim())
        .ok()
        .as_ref()
        .and_then(Domain::from_url)
        .map(|d| d.0)
}

/// Scrape one recipe page.
pub async fn scrape_url(scraper: &Scraper, url: &str, opts: &ScrapeOptions) -> Result<RecipeRecord> {
    let start_time = Instant::now();
    let result = scraper.scrape_with(url, opts).await;
    let elapsed = start_time.elapsed().as_millis();
    let host = host_of(url);

    match &result {
        Ok(_) => log_info(host.as_deref(), "scrape_url", &format!("succeeded in {elapsed}ms")),
        Err(e) => log_error(
            host.as_deref(),
            "scrape_url",
            &format!("failed in {elapsed}ms: {e}"),
        ),
    }
    result
}

/// Blocking variant of [`scrape_url`] on the shared runtime.
///
/// Must not be called from within an async context.
pub fn scrape_url_blocking(
    scraper: &Scraper,
    url: &str,
    opts: &ScrapeOptions,
) -> Result<RecipeRecord> {
    runtime::block_on(scrape_url(scraper, url, opts))
}

/// Scrape many pages with at most `concurrency` in flight.
///
/// Results come back in input order, each paired with its URL. One failing
/// page does not affect the others.
pub async fn scrape_many(
    scraper: &Scraper,
    urls: Vec<String>,
    concurrency: usize,
    opts: &ScrapeOptions,
) -> Vec<(String, Result<RecipeRecord>)> {
    let start_time = Instant::now();
    let total = urls.len();
    let scraper = scraper.clone();
    let opts = opts.clone();

    let results = batch(urls, concurrency, move |url| {
        let scraper = scraper.clone();
        let opts = opts.clone();
        async move {
            let result = scrape_url(&scraper, &url, &opts).await;
            (url, result)
        }
    })
    .await;

    let failed = results.iter().filter(|(_, r)| r.is_err()).count();
    let details = format!(
        "{} of {total} succeeded in {}ms",
        total - failed,
        start_time.elapsed().as_millis()
    );
    if failed == 0 {
        log_info(None, "scrape_many", &details);
    } else {
        log_error(None, "scrape_many", &details);
    }
    results
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::AdapterRegistry;
    use crate::error::{FetchError, ScrapeError};
    use crate::test_support::{MockFetcher, MockReply, PANCAKES_PAGE};
    use crate::tools::fetch::Fetcher;

    fn scraper_with(reply: MockReply) -> (Arc<MockFetcher>, Scraper) {
        let fetcher = Arc::new(MockFetcher::new(reply));
        let scraper = Scraper::new(fetcher.clone(), AdapterRegistry::with_defaults());
        (fetcher, scraper)
    }

    #[test]
    fn host_of_canonicalizes() {
        assert_eq!(
            host_of("https://WWW.Chefkoch.de/rezepte/1"),
            Some("www.chefkoch.de".to_string())
        );
        assert_eq!(host_of("nonsense"), None);
    }

    #[tokio::test]
    async fn scrape_many_keeps_input_order_and_isolates_failures() {
        let (fetcher, scraper) = scraper_with(MockReply::Page(PANCAKES_PAGE));
        let urls = vec![
            "https://www.chefkoch.de/rezepte/1/a.html".to_string(),
            "https://example.com/recipe".to_string(),
            "https://chefkoch.de/rezepte/2/b.html".to_string(),
        ];

        let results = scrape_many(&scraper, urls.clone(), 2, &ScrapeOptions::default()).await;

        let returned: Vec<_> = results.iter().map(|(u, _)| u.clone()).collect();
        assert_eq!(returned, urls);
        assert_eq!(results[0].1.as_ref().unwrap().name, "Pancakes");
        assert!(matches!(results[1].1, Err(ScrapeError::UnsupportedSource(_))));
        assert!(results[2].1.is_ok());
        assert_eq!(fetcher.calls(), 2);
        assert_eq!(fetcher.in_flight(), 0);
    }

    #[tokio::test]
    async fn scrape_url_passes_errors_through() {
        let (_, scraper) = scraper_with(MockReply::Status(503));
        let err = scrape_url(
            &scraper,
            "https://www.chefkoch.de/rezepte/1/a.html",
            &ScrapeOptions::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ScrapeError::Fetch(FetchError::Status { status: 503, .. })));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn calls_are_logged_outside_the_home_directory() {
        let (_, scraper) = scraper_with(MockReply::Page(PANCAKES_PAGE));
        scrape_url(&scraper, "https://chefkoch.de/rezepte/9/log.html", &ScrapeOptions::default())
            .await
            .unwrap();

        let logger = activity_logger().unwrap();
        let lines = logger.read_logs(Some("chefkoch.de"), false).unwrap();
        assert!(lines.iter().any(|l| l.contains("🟢 scrape_url chefkoch.de succeeded in")));

        assert!(logger.path().starts_with(std::env::temp_dir()));
    }

    #[test]
    fn blocking_variant_runs_outside_async() {
        let (fetcher, scraper) = scraper_with(MockReply::Page(PANCAKES_PAGE));
        let record = scrape_url_blocking(
            &scraper,
            "https://www.chefkoch.de/rezepte/1/a.html",
            &ScrapeOptions::default(),
        )
        .unwrap();
        assert_eq!(record.ingredients.len(), 2);
        assert_eq!(fetcher.in_flight(), 0);
    }
}
