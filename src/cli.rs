use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::activity::ActivityLogger;
use crate::api;
use crate::config::Config;
use crate::runtime;
use crate::tools::scrape::{ScrapeOptions, Scraper};
use crate::types::{ApiResponse, Domain, RecipeRecord};

#[derive(Parser)]
#[command(name = "recipe-scraper", version, about = "Recipe pages to structured records (JSON only)")]
pub struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scrape one recipe page
    Scrape(ScrapeArgs),
    /// Scrape several pages concurrently; results keep input order
    Batch(BatchArgs),
    /// Show the activity log, most recent first
    Logs(LogsArgs),
    /// List supported hosts
    Hosts,
}

#[derive(Args)]
struct ScrapeArgs {
    url: String,
    /// Deadline for the fetch, overriding the configured timeout
    #[arg(long = "timeout-ms")]
    timeout_ms: Option<u64>,
}

#[derive(Args)]
struct BatchArgs {
    #[arg(required = true)]
    urls: Vec<String>,
    #[arg(long)]
    concurrency: Option<usize>,
}

#[derive(Args)]
struct LogsArgs {
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    errors: bool,
}

#[derive(Serialize)]
struct BatchItem {
    url: String,
    #[serde(flatten)]
    response: ApiResponse<RecipeRecord>,
}

pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = dispatch(cli.cmd) {
        print_json(ApiResponse::<()>::err(format!("{e:#}")));
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn dispatch(cmd: Command) -> anyhow::Result<()> {
    let config = Config::load()?;

    match cmd {
        Command::Scrape(ScrapeArgs { url, timeout_ms }) => {
            let scraper = Scraper::with_defaults(&config.fetch)?;
            let mut opts = ScrapeOptions::default();
            if let Some(ms) = timeout_ms {
                opts = opts.with_timeout(Duration::from_millis(ms));
            }
            finish(api::scrape_url_blocking(&scraper, &url, &opts));
        }
        Command::Batch(BatchArgs { urls, concurrency }) => {
            let scraper = Scraper::with_defaults(&config.fetch)?;
            let concurrency = concurrency.unwrap_or(config.concurrency);
            let results = runtime::block_on(api::scrape_many(
                &scraper,
                urls,
                concurrency,
                &ScrapeOptions::default(),
            ));
            let items: Vec<BatchItem> = results
                .into_iter()
                .map(|(url, result)| BatchItem {
                    url,
                    response: match result {
                        Ok(record) => ApiResponse::ok(record),
                        Err(e) => ApiResponse::err(e.to_string()),
                    },
                })
                .collect();
            print_json(ApiResponse::ok(items));
        }
        Command::Logs(LogsArgs { host, errors }) => {
            let logger = ActivityLogger::new()?;
            let host = host.map(|h| Domain::from_raw(&h).0);
            print_json(ApiResponse::ok(logger.read_logs(host.as_deref(), errors)?));
        }
        Command::Hosts => {
            let registry = crate::adapters::AdapterRegistry::with_defaults();
            print_json(ApiResponse::ok(registry.hosts()));
        }
    }
    Ok(())
}

fn finish<T: Serialize>(res: crate::Result<T>) {
    match res {
        Ok(v) => print_json(ApiResponse::ok(v)),
        Err(e) => print_json(ApiResponse::<()>::err(e.to_string())),
    }
}

fn print_json<T: Serialize>(val: T) {
    match serde_json::to_string_pretty(&val) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to encode output: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scrape_with_timeout() {
        let cli = Cli::try_parse_from([
            "recipe-scraper",
            "scrape",
            "https://www.chefkoch.de/rezepte/1/a.html",
            "--timeout-ms",
            "500",
        ])
        .unwrap();
        match cli.cmd {
            Command::Scrape(args) => assert_eq!(args.timeout_ms, Some(500)),
            _ => panic!("expected scrape"),
        }
    }

    #[test]
    fn batch_requires_urls() {
        assert!(Cli::try_parse_from(["recipe-scraper", "batch"]).is_err());
        assert!(Cli::try_parse_from(["recipe-scraper", "batch", "a", "b", "--concurrency", "2"]).is_ok());
    }

    #[test]
    fn batch_item_flattens_response() {
        let item = BatchItem {
            url: "https://example.com".into(),
            response: ApiResponse::err("unsupported source: example.com"),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["url"], "https://example.com");
        assert_eq!(json["ok"], false);
    }
}
