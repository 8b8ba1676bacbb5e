//! Report rendering: CSV export text and the plain-text terminal report.

mod csv;
mod text;

pub use csv::{escape_field, format_csv};
pub use text::render_text;

use crate::aggregate::DEFAULT_PENALTY_PER_WRONG;

/// Title line written at the top of every report.
pub const DEFAULT_TITLE: &str = "SSC Examination Result Analysis";

/// Knobs shared by both renderers.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub title: String,
    /// Marks deducted per wrong answer.
    pub penalty_per_wrong: f64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            penalty_per_wrong: DEFAULT_PENALTY_PER_WRONG,
        }
    }
}
