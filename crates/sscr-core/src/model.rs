//! Result record types and construction-time consistency checks.

use serde::{Deserialize, Serialize};

use crate::aggregate::{aggregate, percent_1dp, Accuracy, Totals};
use crate::error::{IntegrityError, IntegrityRule};

/// One scored subject block within an exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScore {
    pub name: String,
    pub total_questions: u32,
    pub total_marks: u32,
    pub attempted: u32,
    pub correct: u32,
    pub wrong: u32,
    pub unattempted: u32,
    pub marks: u32,
    /// Published section accuracy, 0..=100.
    pub accuracy: f64,
}

impl SectionScore {
    /// Marks obtained as a share of the section's total, to one decimal, or
    /// `None` for a zero-mark section.
    pub fn marks_percentage(&self) -> Option<f64> {
        percent_1dp(self.marks, self.total_marks)
    }

    /// Accuracy recomputed from the counters.
    pub fn computed_accuracy(&self) -> Accuracy {
        Accuracy::from_counts(self.correct, self.attempted)
    }

    /// Checks the counters against each other.
    pub fn validate(&self) -> Result<(), IntegrityError> {
        let fail = |rule| {
            Err(IntegrityError {
                section: self.name.clone(),
                rule,
            })
        };

        if u64::from(self.correct) + u64::from(self.wrong) != u64::from(self.attempted) {
            return fail(IntegrityRule::AttemptedMismatch {
                attempted: self.attempted,
                correct: self.correct,
                wrong: self.wrong,
            });
        }
        if u64::from(self.attempted) + u64::from(self.unattempted)
            != u64::from(self.total_questions)
        {
            return fail(IntegrityRule::QuestionCountMismatch {
                attempted: self.attempted,
                unattempted: self.unattempted,
                total_questions: self.total_questions,
            });
        }
        if self.marks > self.total_marks {
            return fail(IntegrityRule::MarksExceedTotal {
                marks: self.marks,
                total_marks: self.total_marks,
            });
        }
        if !(0.0..=100.0).contains(&self.accuracy) {
            return fail(IntegrityRule::AccuracyOutOfRange);
        }
        Ok(())
    }
}

/// Candidate and exam details that are not derived from sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateHeader {
    pub name: String,
    pub roll_number: String,
    pub registration_number: String,
    pub exam_name: String,
    pub exam_date: String,
    pub exam_time: String,
    pub test_venue: String,
    pub total_questions: u32,
    pub total_marks: u32,
    pub status: String,
}

/// A candidate's full result: header, ordered sections, and the totals
/// aggregated from them.
///
/// Totals are private to construction; `ResultRecord::new` is the only way
/// to build one, so they always agree with `sections`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    #[serde(flatten)]
    header: CandidateHeader,
    sections: Vec<SectionScore>,
    #[serde(flatten)]
    totals: Totals,
}

impl ResultRecord {
    /// Validates every section and aggregates the totals.
    pub fn new(header: CandidateHeader, sections: Vec<SectionScore>) -> Result<Self, IntegrityError> {
        for s in &sections {
            s.validate()?;
        }
        let totals = aggregate(&sections);
        Ok(Self {
            header,
            sections,
            totals,
        })
    }

    pub fn header(&self) -> &CandidateHeader {
        &self.header
    }

    pub fn sections(&self) -> &[SectionScore] {
        &self.sections
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn roll_number(&self) -> &str {
        &self.header.roll_number
    }

    /// Marks obtained across all sections as a share of the exam total.
    pub fn overall_percentage(&self) -> Option<f64> {
        percent_1dp(self.totals.total_marks_obtained, self.header.total_marks)
    }
}
