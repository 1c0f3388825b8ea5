//! Structured logging setup, controlled via `RUST_LOG` (default `info`).
//!
//! While the full-screen UI owns the terminal, log lines go to a file.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

const APP_DIR: &str = "peopleinspace";
const LOG_FILE: &str = "peopleinspace.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr, for one-shot commands.
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Log to `path`, or to the default log file. Returns the file used.
pub fn init_file(path: Option<&Path>) -> anyhow::Result<PathBuf> {
    let path = path.map_or_else(default_log_path, Path::to_path_buf);
    let file = open_log(&path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(path)
}

/// `<data_dir>/peopleinspace/peopleinspace.log`, or the temp dir.
pub fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join(LOG_FILE)
}

fn open_log(path: &Path) -> anyhow::Result<File> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_with_app_file() {
        let path = default_log_path();
        assert!(path.ends_with("peopleinspace/peopleinspace.log"));
    }

    #[test]
    fn open_log_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("peopleinspace-log-{}", std::process::id()));
        let path = dir.join("nested").join("app.log");
        open_log(&path).unwrap();
        assert!(path.exists());
        fs::remove_dir_all(&dir).unwrap();
    }
}
