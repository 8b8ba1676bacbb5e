use sscr_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Logging first; an unwritable state dir falls back to stderr.
    let sink = logging::init_logging().unwrap_or_else(|_| logging::init_logging_stderr());
    tracing::debug!(?sink, "logging ready");

    match CliCommand::run_from_args().await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("sscr error: {:#}", err);
            std::process::exit(1);
        }
    }
}
