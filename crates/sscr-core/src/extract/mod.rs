//! Extraction of a `ResultRecord` from a result-page URL.
//!
//! Only a mock is provided: it waits, reads the two identifiers embedded in
//! the URL, and fills the rest from a fixed template. A real implementation
//! would fetch and parse the page behind the same trait.

mod mock;
mod names;
mod template;

use async_trait::async_trait;
use url::Url;

use crate::error::ExtractError;
use crate::model::ResultRecord;

pub use mock::{MockExtractor, DEFAULT_MOCK_DELAY};
pub use names::random_candidate_name;
pub use template::{sample_record, SAMPLE_URL};

/// Source of result records for a validated URL.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, url: &Url) -> Result<ResultRecord, ExtractError>;
}
