//! `sscr validate <url>` – syntactic URL check.

use sscr_core::url_model::is_valid_url;

/// Prints `valid` or `invalid`; returns the exit code (0 or 2).
pub fn run_validate(url: &str) -> i32 {
    if is_valid_url(url.trim()) {
        println!("valid");
        0
    } else {
        println!("invalid");
        2
    }
}
