#![doc = include_str!("../README.md")]

pub mod activity;
pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod runtime;
pub mod selectors;
pub mod tools;
pub mod types;

#[cfg(test)]
mod test_support;

pub use adapters::{AdapterRegistry, SiteAdapter};
pub use error::*;
pub use tools::fetch::{Fetcher, ReqwestFetcher};
pub use tools::scrape::{ScrapeOptions, Scraper};
pub use types::*;
