//! URL modeling: input validation, URL-derived candidate fields, and the
//! export file name.

mod fields;
mod sanitize;
mod validate;

pub use fields::{registration_number_from_url, roll_number_from_url};
pub use sanitize::sanitize_component;
pub use validate::{check_url, is_valid_url};

/// Stem used when the roll number yields nothing usable.
const DEFAULT_STEM: &str = "result";

/// File name for an exported report: `{rollNumber}_result.csv`.
///
/// The roll number is sanitized for Linux; an empty result falls back to
/// `result.csv`.
///
/// # Examples
///
/// - `export_filename("2201057187")` → `"2201057187_result.csv"`
/// - `export_filename("")` → `"result.csv"`
pub fn export_filename(roll_number: &str) -> String {
    let stem = sanitize_component(roll_number);
    if stem.is_empty() {
        format!("{DEFAULT_STEM}.csv")
    } else {
        format!("{stem}_result.csv")
    }
}
