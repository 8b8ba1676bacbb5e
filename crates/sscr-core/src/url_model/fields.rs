//! Candidate identifiers embedded in result-page URLs.
//!
//! Result pages are published under paths like
//! `.../32874O2411/32874O2411S6D36748/.../2201057187_32874O2411S6D36748E4.html`:
//! the file name starts with the 10-digit roll number followed by `_`, and the
//! exam code (5 digits, letter `O`, 4 digits) appears in the path.

use regex::Regex;
use std::sync::OnceLock;

fn roll_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{10})_").expect("roll number pattern"))
}

fn registration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{5}O\d{4}").expect("registration pattern"))
}

/// First 10-digit run immediately followed by `_`.
pub fn roll_number_from_url(url: &str) -> Option<String> {
    roll_number_re()
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// First `ddddd O dddd` exam code.
pub fn registration_number_from_url(url: &str) -> Option<String> {
    registration_re()
        .find(url)
        .map(|m| m.as_str().to_string())
}
