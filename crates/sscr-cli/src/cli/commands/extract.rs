//! `sscr extract <url>` – run one extraction and report it.

use anyhow::{Context, Result};
use sscr_core::config::SscrConfig;
use sscr_core::export::{export_csv, CSV_MIME};
use sscr_core::extract::MockExtractor;
use sscr_core::report::{format_csv, render_text};
use sscr_core::session::{Session, StateEvent};
use std::path::PathBuf;
use std::time::Duration;

/// Options for `sscr extract`, flattened from the subcommand.
#[derive(Debug, Clone)]
pub struct ExtractArgs {
    pub url: String,
    pub delay_ms: Option<u64>,
    pub csv: bool,
    pub out_dir: Option<PathBuf>,
    pub overwrite: bool,
    pub print_csv: bool,
    pub json: bool,
}

/// Runs the extraction; returns exit code 1 for request errors (already
/// reported to the user) and `Err` only for I/O failures.
pub async fn run_extract(cfg: &SscrConfig, args: ExtractArgs) -> Result<i32> {
    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| cfg.extraction_delay());
    let opts = cfg.report_options();

    let (events_tx, mut events_rx) = tokio::sync::mpsc::channel::<StateEvent>(8);
    let progress_handle = tokio::spawn(async move {
        while let Some(ev) = events_rx.recv().await {
            if let StateEvent::Pending { url } = ev {
                eprintln!("Extracting data from {url} ...");
            }
        }
    });

    let mut session = Session::new(MockExtractor::new(delay))
        .with_retry(cfg.retry_policy())
        .with_events(events_tx);

    let outcome = session.submit(&args.url).await.cloned();
    drop(session);
    let _ = progress_handle.await;

    let record = match outcome {
        Ok(record) => record,
        Err(e) => {
            eprintln!("{}", e.user_message());
            tracing::debug!("extract error detail: {}", e);
            return Ok(1);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else if args.print_csv {
        print!("{}", format_csv(&record, &opts));
    } else {
        print!("{}", render_text(&record, &opts));
    }

    if args.csv {
        let dir = match args.out_dir.or_else(|| cfg.export_dir.clone()) {
            Some(dir) => dir,
            None => std::env::current_dir().context("current directory")?,
        };
        let overwrite = args.overwrite || cfg.overwrite_exports;
        let path = export_csv(&record, &dir, &opts, overwrite)?;
        eprintln!("Exported {} ({CSV_MIME})", path.display());
    }

    Ok(0)
}
