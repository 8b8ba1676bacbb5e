//! Mock extractor: fixed delay, URL-derived identifiers, template body.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;
use std::time::Duration;
use url::Url;

use crate::error::ExtractError;
use crate::model::ResultRecord;
use crate::url_model::{registration_number_from_url, roll_number_from_url};

use super::names::random_candidate_name;
use super::template::{template_header, template_sections, FALLBACK_REGISTRATION, FALLBACK_ROLL_NUMBER};
use super::Extractor;

/// Artificial round-trip delay of the mock.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(2000);

/// Stands in for a real result-page parser. Only the roll number and
/// registration number depend on the URL; the name is random and everything
/// else comes from the template.
pub struct MockExtractor {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl MockExtractor {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic names for tests and reproducible runs.
    pub fn with_seed(delay: Duration, seed: u64) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn build(&self, url: &Url) -> Result<ResultRecord, ExtractError> {
        let mut header = template_header();
        let raw = url.as_str();
        header.roll_number =
            roll_number_from_url(raw).unwrap_or_else(|| FALLBACK_ROLL_NUMBER.to_string());
        header.registration_number =
            registration_number_from_url(raw).unwrap_or_else(|| FALLBACK_REGISTRATION.to_string());
        header.name = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| ExtractError::ExtractionFailure("name generator poisoned".into()))?;
            random_candidate_name(&mut *rng)
        };
        Ok(ResultRecord::new(header, template_sections())?)
    }
}

impl Default for MockExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_DELAY)
    }
}

#[async_trait]
impl Extractor for MockExtractor {
    async fn extract(&self, url: &Url) -> Result<ResultRecord, ExtractError> {
        tracing::debug!(url = %url, delay_ms = self.delay.as_millis() as u64, "mock extraction");
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.build(url)
    }
}
