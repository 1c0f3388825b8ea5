//! Viewer configuration.
//!
//! Built from environment variables at startup, then selectively
//! overridden by command-line flags in `main`.

use std::path::PathBuf;
use std::time::Duration;

use peopleinspace_sdk::{PollIntervals, DEFAULT_BASE_URL};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the open-notify API.
    pub api_url: String,
    /// Refresh periods for people and position.
    pub intervals: PollIntervals,
    /// Per-request HTTP timeout.
    pub http_timeout: Duration,
    /// Person directory overlay; `None` means the default location.
    pub directory: Option<PathBuf>,
    /// Log file used while the full-screen UI is up.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable                               | Default                      |
    /// |----------------------------------------|------------------------------|
    /// | `PEOPLEINSPACE_API_URL`                | `http://api.open-notify.org` |
    /// | `PEOPLEINSPACE_PEOPLE_INTERVAL_SECS`   | `60`                         |
    /// | `PEOPLEINSPACE_POSITION_INTERVAL_SECS` | `10`                         |
    /// | `PEOPLEINSPACE_HTTP_TIMEOUT_SECS`      | `10`                         |
    /// | `PEOPLEINSPACE_DIRECTORY`              | config dir `people.json`     |
    /// | `PEOPLEINSPACE_LOG_FILE`               | data dir `peopleinspace.log` |
    ///
    /// Unparseable numbers fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let secs = |key: &str, default: u64| {
            Duration::from_secs(
                lookup(key)
                    .and_then(|v| v.trim().parse().ok())
                    .filter(|s| *s > 0)
                    .unwrap_or(default),
            )
        };
        let defaults = PollIntervals::default();

        Self {
            api_url: lookup("PEOPLEINSPACE_API_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            intervals: PollIntervals {
                people: secs("PEOPLEINSPACE_PEOPLE_INTERVAL_SECS", defaults.people.as_secs()),
                position: secs("PEOPLEINSPACE_POSITION_INTERVAL_SECS", defaults.position.as_secs()),
            },
            http_timeout: secs("PEOPLEINSPACE_HTTP_TIMEOUT_SECS", 10),
            directory: lookup("PEOPLEINSPACE_DIRECTORY").map(PathBuf::from),
            log_file: lookup("PEOPLEINSPACE_LOG_FILE").map(PathBuf::from),
        }
    }
}
