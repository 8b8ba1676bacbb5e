pub mod config;
pub mod logging;

pub mod aggregate;
pub mod error;
pub mod export;
pub mod extract;
pub mod model;
pub mod report;
pub mod retry;
pub mod session;
pub mod url_model;

pub use aggregate::{aggregate, Accuracy, AccuracyBand, Totals};
pub use error::{ExtractError, IntegrityError};
pub use model::{CandidateHeader, ResultRecord, SectionScore};
pub use session::{RequestState, Session};
