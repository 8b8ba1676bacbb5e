//! Tests for the extract subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

const URL: &str = "https://ssc.digialm.com/per/pub/32874O2411/2201057187_32874O2411S6D36748E4.html";

#[test]
fn cli_parse_extract_defaults() {
    match parse(&["sscr", "extract", URL]) {
        CliCommand::Extract {
            url,
            delay_ms,
            csv,
            out_dir,
            overwrite,
            print_csv,
            json,
        } => {
            assert_eq!(url, URL);
            assert!(delay_ms.is_none());
            assert!(!csv);
            assert!(out_dir.is_none());
            assert!(!overwrite);
            assert!(!print_csv);
            assert!(!json);
        }
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_extract_export_flags() {
    match parse(&[
        "sscr",
        "extract",
        URL,
        "--csv",
        "--out-dir",
        "/tmp",
        "--overwrite",
        "--delay-ms",
        "0",
    ]) {
        CliCommand::Extract {
            csv,
            out_dir,
            overwrite,
            delay_ms,
            ..
        } => {
            assert!(csv);
            assert!(overwrite);
            assert_eq!(delay_ms, Some(0));
            assert_eq!(out_dir.as_deref(), Some(std::path::Path::new("/tmp")));
        }
        _ => panic!("expected Extract with export flags"),
    }
}

#[test]
fn cli_parse_extract_print_csv() {
    match parse(&["sscr", "extract", URL, "--print-csv"]) {
        CliCommand::Extract { print_csv, json, .. } => {
            assert!(print_csv);
            assert!(!json);
        }
        _ => panic!("expected Extract with --print-csv"),
    }
}

#[test]
fn cli_rejects_print_csv_with_json() {
    assert!(Cli::try_parse_from(["sscr", "extract", URL, "--print-csv", "--json"]).is_err());
}

#[test]
fn cli_extract_requires_url() {
    assert!(Cli::try_parse_from(["sscr", "extract"]).is_err());
}
