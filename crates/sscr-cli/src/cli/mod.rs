//! CLI for the SSC result extractor.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use sscr_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_config, run_extract, run_fields, run_man, run_validate, ExtractArgs};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sscr")]
#[command(about = "SSC exam result extractor: validate result URLs, summarize scores, export CSV", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check that a result URL is a well-formed absolute URL.
    Validate {
        /// Result page URL.
        url: String,
    },

    /// Extract a result, print the report, and optionally export it as CSV.
    Extract {
        /// Result page URL.
        url: String,
        /// Override the artificial extraction delay (milliseconds).
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,
        /// Write `{roll}_result.csv` into the export directory.
        #[arg(long)]
        csv: bool,
        /// Export directory (default: config `export_dir`, else current directory).
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
        /// Replace an existing export file.
        #[arg(long)]
        overwrite: bool,
        /// Print the CSV report to stdout instead of the text report.
        #[arg(long, conflicts_with = "json")]
        print_csv: bool,
        /// Print the extracted record as JSON instead of the text report.
        #[arg(long)]
        json: bool,
    },

    /// Show the roll and registration numbers embedded in a result URL.
    Fields {
        /// Result page URL.
        url: String,
    },

    /// Show the config file path and effective values.
    Config,

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Render the man page to stdout.
    Man,
}

impl CliCommand {
    /// Parses arguments, dispatches, and returns the process exit code.
    pub async fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Validate { url } => return Ok(run_validate(&url)),
            CliCommand::Extract {
                url,
                delay_ms,
                csv,
                out_dir,
                overwrite,
                print_csv,
                json,
            } => {
                let args = ExtractArgs {
                    url,
                    delay_ms,
                    csv,
                    out_dir,
                    overwrite,
                    print_csv,
                    json,
                };
                return run_extract(&cfg, args).await;
            }
            CliCommand::Fields { url } => run_fields(&url),
            CliCommand::Config => run_config(&cfg)?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(0)
    }
}

#[cfg(test)]
mod tests;
