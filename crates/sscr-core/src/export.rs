//! CSV delivery: write `{rollNumber}_result.csv` into a directory.
//!
//! The report is written to a `.part` sibling, synced, then renamed into
//! place so a reader never sees a half-written file.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::model::ResultRecord;
use crate::report::{format_csv, ReportOptions};
use crate::url_model::export_filename;

/// MIME type for callers that serve the report over HTTP.
pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// Path for the temp file: appends `.part` to the final path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(".part");
    PathBuf::from(o)
}

/// Writes the CSV report for `record` into `dir` and returns the final path.
///
/// Fails if the file already exists and `overwrite` is false.
pub fn export_csv(
    record: &ResultRecord,
    dir: &Path,
    opts: &ReportOptions,
    overwrite: bool,
) -> Result<PathBuf> {
    let final_path = dir.join(export_filename(record.roll_number()));
    if final_path.exists() && !overwrite {
        anyhow::bail!(
            "{} already exists; pass --overwrite to replace it",
            final_path.display()
        );
    }

    let csv = format_csv(record, opts);
    let tmp = temp_path(&final_path);
    if let Err(e) = finalize(&tmp, &final_path, csv.as_bytes()) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e);
    }

    tracing::info!(path = %final_path.display(), bytes = csv.len(), "exported result csv");
    Ok(final_path)
}

fn finalize(tmp: &Path, final_path: &Path, data: &[u8]) -> Result<()> {
    write_synced(tmp, data)?;
    std::fs::rename(tmp, final_path).with_context(|| {
        format!(
            "failed to rename {} to {}",
            tmp.display(),
            final_path.display()
        )
    })
}

fn write_synced(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("failed to create temp file: {}", path.display()))?;
    file.write_all(data)
        .with_context(|| format!("write {}", path.display()))?;
    file.sync_all().context("export sync failed")?;
    Ok(())
}
