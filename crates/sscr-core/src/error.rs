//! Error taxonomy for a single extraction request.
//!
//! Every variant is recoverable by resubmitting; none of them is fatal to the
//! process. Callers show `user_message()` and clear any previous result.

use thiserror::Error;

/// A section whose counters contradict each other.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("section {section:?}: {rule}")]
pub struct IntegrityError {
    pub section: String,
    pub rule: IntegrityRule,
}

/// Which consistency rule a section broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityRule {
    #[error("correct ({correct}) + wrong ({wrong}) != attempted ({attempted})")]
    AttemptedMismatch {
        attempted: u32,
        correct: u32,
        wrong: u32,
    },
    #[error("attempted ({attempted}) + unattempted ({unattempted}) != total questions ({total_questions})")]
    QuestionCountMismatch {
        attempted: u32,
        unattempted: u32,
        total_questions: u32,
    },
    #[error("marks ({marks}) exceed total marks ({total_marks})")]
    MarksExceedTotal { marks: u32, total_marks: u32 },
    #[error("accuracy outside 0..=100")]
    AccuracyOutOfRange,
}

/// Why an extraction request produced no result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    /// URL field was blank.
    #[error("empty input")]
    EmptyInput,
    /// Input is not a well-formed absolute URL.
    #[error("invalid URL format: {0}")]
    InvalidUrlFormat(String),
    /// The extractor could not produce a record.
    #[error("extraction failed: {0}")]
    ExtractionFailure(String),
    /// The extracted record failed its consistency checks.
    #[error("inconsistent result data: {0}")]
    Integrity(#[from] IntegrityError),
}

impl ExtractError {
    /// Message shown to the user in place of a result.
    pub fn user_message(&self) -> &'static str {
        match self {
            ExtractError::EmptyInput => "Please enter a valid result URL",
            ExtractError::InvalidUrlFormat(_) => "Please enter a valid URL format",
            ExtractError::ExtractionFailure(_) | ExtractError::Integrity(_) => {
                "Failed to extract data from the provided URL. Please check the URL and try again."
            }
        }
    }

    /// Short stable name for logs and state events.
    pub fn kind_str(&self) -> &'static str {
        match self {
            ExtractError::EmptyInput => "empty_input",
            ExtractError::InvalidUrlFormat(_) => "invalid_url_format",
            ExtractError::ExtractionFailure(_) => "extraction_failure",
            ExtractError::Integrity(_) => "integrity",
        }
    }
}
