//! Tracing setup: append to the XDG state log, or fall back to stderr.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Log file name under `$XDG_STATE_HOME/sscr/`.
pub const LOG_FILE_NAME: &str = "sscr.log";

/// Filter override that takes precedence over `RUST_LOG`.
pub const FILTER_ENV: &str = "SSCR_LOG";

const DEFAULT_FILTER: &str = "info,sscr=debug,sscr_core=debug,sscr_cli=debug";

/// Where log records end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

/// First non-empty directive string that parses wins; unparsable overrides
/// are skipped rather than silencing the log.
fn filter_from(own: Option<String>, rust_log: Option<String>) -> EnvFilter {
    [own, rust_log]
        .into_iter()
        .flatten()
        .filter(|d| !d.trim().is_empty())
        .find_map(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn env_filter() -> EnvFilter {
    filter_from(std::env::var(FILTER_ENV).ok(), std::env::var("RUST_LOG").ok())
}

/// `$XDG_STATE_HOME/sscr/sscr.log`, creating the directory if needed.
pub fn log_file_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("sscr")?;
    dirs.place_state_file(LOG_FILE_NAME)
        .context("create sscr state directory")
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Installs the global subscriber writing to the state log file.
/// Errors leave no subscriber installed so the caller can use
/// [`init_logging_stderr`].
pub fn init_logging() -> Result<LogSink> {
    let path = log_file_path()?;
    let file = open_append(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "sscr logging initialized");
    Ok(LogSink::File(path))
}

/// Stderr-only subscriber. A subscriber that is already installed is kept.
pub fn init_logging_stderr() -> LogSink {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
    LogSink::Stderr
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn directives(f: EnvFilter) -> String {
        f.to_string().to_lowercase()
    }

    #[test]
    fn own_override_beats_rust_log() {
        let f = filter_from(Some("warn".into()), Some("trace".into()));
        assert_eq!(directives(f), "warn");
    }

    #[test]
    fn bad_override_falls_through() {
        let f = filter_from(Some("sscr=loud".into()), Some("error".into()));
        assert_eq!(directives(f), "error");
    }

    #[test]
    fn blank_or_missing_uses_default() {
        let f = directives(filter_from(Some("  ".into()), None));
        assert!(f.contains("sscr_core=debug"));
        assert!(f.contains("sscr_cli=debug"));
    }

    #[test]
    fn open_append_keeps_existing_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        std::fs::write(&path, "first\n").unwrap();

        let mut f = open_append(&path).unwrap();
        writeln!(f, "second").unwrap();
        drop(f);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn open_append_reports_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_append(&dir.path().join("nope").join(LOG_FILE_NAME)).unwrap_err();
        assert!(err.to_string().contains("open log file"));
    }
}
