//! Retry and backoff policy for the extraction step.
//!
//! Input and integrity errors are final; only extractor failures are retried,
//! with exponential backoff.

mod classify;
mod policy;
mod run;

pub use classify::classify;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
