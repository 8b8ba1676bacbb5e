//! CLI command handlers, one per file.

mod completions;
mod config;
mod extract;
mod fields;
mod validate;

pub use completions::{run_completions, run_man};
pub use config::run_config;
pub use extract::{run_extract, ExtractArgs};
pub use fields::run_fields;
pub use validate::run_validate;
