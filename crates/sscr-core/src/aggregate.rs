//! Aggregation of per-section counters into result totals.
//!
//! One linear pass; the sum does not depend on section order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::SectionScore;

/// Marks deducted per wrong answer unless configured otherwise.
pub const DEFAULT_PENALTY_PER_WRONG: f64 = 0.5;

/// Accuracy percentage, or `NotApplicable` when nothing was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accuracy {
    Percent(f64),
    NotApplicable,
}

impl Accuracy {
    /// `correct / attempted * 100` rounded to 2 places.
    pub fn from_counts(correct: u32, attempted: u32) -> Self {
        if attempted == 0 {
            return Accuracy::NotApplicable;
        }
        let pct = f64::from(correct) / f64::from(attempted) * 100.0;
        Accuracy::Percent(round_to(pct, 2))
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Accuracy::Percent(v) => Some(v),
            Accuracy::NotApplicable => None,
        }
    }

    pub fn band(self) -> Option<AccuracyBand> {
        self.value().map(AccuracyBand::classify)
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accuracy::Percent(v) => write!(f, "{:.2}", v),
            Accuracy::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// Coarse rating of an accuracy percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccuracyBand {
    Excellent,
    Good,
    Average,
    BelowAverage,
    Poor,
}

impl AccuracyBand {
    pub fn classify(pct: f64) -> Self {
        if pct >= 80.0 {
            AccuracyBand::Excellent
        } else if pct >= 70.0 {
            AccuracyBand::Good
        } else if pct >= 60.0 {
            AccuracyBand::Average
        } else if pct >= 50.0 {
            AccuracyBand::BelowAverage
        } else {
            AccuracyBand::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccuracyBand::Excellent => "excellent",
            AccuracyBand::Good => "good",
            AccuracyBand::Average => "average",
            AccuracyBand::BelowAverage => "below average",
            AccuracyBand::Poor => "poor",
        }
    }
}

/// Totals derived from a record's sections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub total_attempted: u32,
    pub total_correct: u32,
    pub total_wrong: u32,
    pub total_unattempted: u32,
    pub total_marks_obtained: u32,
    pub overall_accuracy: Accuracy,
}

/// Sums section counters and derives the overall accuracy.
pub fn aggregate(sections: &[SectionScore]) -> Totals {
    let mut attempted = 0u32;
    let mut correct = 0u32;
    let mut wrong = 0u32;
    let mut unattempted = 0u32;
    let mut marks = 0u32;

    for s in sections {
        attempted = attempted.saturating_add(s.attempted);
        correct = correct.saturating_add(s.correct);
        wrong = wrong.saturating_add(s.wrong);
        unattempted = unattempted.saturating_add(s.unattempted);
        marks = marks.saturating_add(s.marks);
    }

    Totals {
        total_attempted: attempted,
        total_correct: correct,
        total_wrong: wrong,
        total_unattempted: unattempted,
        total_marks_obtained: marks,
        overall_accuracy: Accuracy::from_counts(correct, attempted),
    }
}

/// Negative marking for `total_wrong` answers.
pub fn penalty(total_wrong: u32, per_wrong: f64) -> f64 {
    f64::from(total_wrong) * per_wrong
}

/// `part / whole` as a percentage rounded half up to one decimal, or `None`
/// when `whole` is zero. Integer arithmetic keeps `.x5` ties exact.
pub fn percent_1dp(part: u32, whole: u32) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    let (part, whole) = (u64::from(part), u64::from(whole));
    let tenths = (2 * part * 1000 + whole) / (2 * whole);
    Some(tenths as f64 / 10.0)
}

/// Rounds half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
