//! `sscr config` – show config path and effective values.

use anyhow::Result;
use sscr_core::config::{self, SscrConfig};

pub fn run_config(cfg: &SscrConfig) -> Result<()> {
    let path = config::config_path()?;
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
