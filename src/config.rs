//! Runtime configuration
//!
//! Defaults, then `~/.recipe-scraper/config.json` when present, then
//! `RECIPE_SCRAPER_*` environment variables.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
const DEFAULT_ACCEPT_LANGUAGE: &str = "de-DE,de;q=0.9,en;q=0.5";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_REDIRECT_LIMIT: usize = 10;
const DEFAULT_CONCURRENCY: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent: String,
    pub accept_language: String,
    pub timeout_ms: u64,
    pub redirect_limit: usize,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.into(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            redirect_limit: DEFAULT_REDIRECT_LIMIT,
            use_system_proxy: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    /// Upper bound on simultaneous scrapes in batch mode.
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl Config {
    /// Load the effective configuration. A broken config file is reported, not ignored.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match config_path() {
            Some(path) if path.exists() => {
                let raw = fs::read_to_string(&path)?;
                Self::from_json(&raw)
                    .map_err(|e| anyhow::anyhow!("invalid config {}: {e}", path.display()))?
            }
            _ => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Apply `RECIPE_SCRAPER_*` overrides. Unparseable numbers are skipped.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ms) = lookup("RECIPE_SCRAPER_TIMEOUT_MS").and_then(|v| v.trim().parse().ok()) {
            self.fetch.timeout_ms = ms;
        }
        if let Some(ua) = lookup("RECIPE_SCRAPER_USER_AGENT") {
            if !ua.trim().is_empty() {
                self.fetch.user_agent = ua.trim().to_string();
            }
        }
        if let Some(n) = lookup("RECIPE_SCRAPER_CONCURRENCY")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
        {
            self.concurrency = n;
        }
    }
}

/// `~/.recipe-scraper`, shared by the config file and the activity log.
pub fn data_dir() -> Option<PathBuf> {
    directories::UserDirs::new().map(|dirs| dirs.home_dir().join(".recipe-scraper"))
}

fn config_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("config.json"))
}
