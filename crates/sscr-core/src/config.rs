use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::aggregate::DEFAULT_PENALTY_PER_WRONG;
use crate::report::ReportOptions;
use crate::retry::RetryPolicy;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of extraction attempts (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            base_delay_secs: 0.25,
            max_delay_secs: 30,
        }
    }
}

/// Global configuration loaded from `~/.config/sscr/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SscrConfig {
    /// Artificial delay of the mock extractor, in milliseconds.
    pub extraction_delay_ms: u64,
    /// Marks deducted per wrong answer in reports.
    pub penalty_per_wrong: f64,
    /// Directory CSV exports are written to (None = current directory).
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
    /// Replace an existing `{roll}_result.csv` instead of failing.
    #[serde(default)]
    pub overwrite_exports: bool,
    /// Optional retry policy; if missing, a single attempt is made.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for SscrConfig {
    fn default() -> Self {
        Self {
            extraction_delay_ms: 2000,
            penalty_per_wrong: DEFAULT_PENALTY_PER_WRONG,
            export_dir: None,
            overwrite_exports: false,
            retry: None,
        }
    }
}

impl SscrConfig {
    pub fn extraction_delay(&self) -> Duration {
        Duration::from_millis(self.extraction_delay_ms)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
            .as_ref()
            .map(RetryPolicy::from)
            .unwrap_or_default()
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            penalty_per_wrong: self.penalty_per_wrong,
            ..ReportOptions::default()
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sscr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SscrConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Same as `load_or_init` for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<SscrConfig> {
    if !path.exists() {
        let default_cfg = SscrConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SscrConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
