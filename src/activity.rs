//! Activity log
//!
//! One line per facade call in `~/.recipe-scraper/activity.log`, newest last.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    fn marker(self) -> &'static str {
        match self {
            LogLevel::Info => "🟢",
            LogLevel::Error => "🔴",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub host: Option<String>,
    pub event: String,
    pub details: Option<String>,
}

pub struct ActivityLogger {
    log_path: PathBuf,
}

impl ActivityLogger {
    pub fn new() -> io::Result<Self> {
        let dir = crate::config::data_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "could not determine home directory")
        })?;
        fs::create_dir_all(&dir)?;
        Ok(Self::at(dir.join("activity.log")))
    }

    /// Logger writing to an explicit file.
    pub fn at(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    pub fn log(
        &self,
        level: LogLevel,
        host: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> io::Result<()> {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            host: host.map(|h| h.to_string()),
            event: event.to_string(),
            details: details.map(|d| d.to_string()),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        writeln!(
            file,
            "{} {} {} {} {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            entry.level.marker(),
            entry.event,
            entry.host.as_deref().unwrap_or("*"),
            entry.details.as_deref().unwrap_or("")
        )
    }

    /// Matching lines, most recent first.
    pub fn read_logs(&self, host_filter: Option<&str>, errors_only: bool) -> io::Result<Vec<String>> {
        if !self.log_path.exists() {
            return Ok(vec![]);
        }

        let reader = BufReader::new(fs::File::open(&self.log_path)?);
        let mut matching_lines = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if errors_only && !line.contains(LogLevel::Error.marker()) {
                continue;
            }
            if let Some(host) = host_filter {
                if !line.split(' ').any(|field| field == host) {
                    continue;
                }
            }
            matching_lines.push(line);
        }

        matching_lines.reverse();
        Ok(matching_lines)
    }

    pub fn info(&self, host: Option<&str>, event: &str, details: Option<&str>) -> io::Result<()> {
        self.log(LogLevel::Info, host, event, details)
    }

    pub fn error(&self, host: Option<&str>, event: &str, details: Option<&str>) -> io::Result<()> {
        self.log(LogLevel::Error, host, event, details)
    }
}
