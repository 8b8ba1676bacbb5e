//! Static SSC CHSL 2024 result used as the body of every mock extraction.

use crate::model::{CandidateHeader, ResultRecord, SectionScore};

/// Result page URL the tool was built against.
pub const SAMPLE_URL: &str = "https://ssc.digialm.com//per/g27/pub/32874/touchstone/AssessmentQPHTMLMode1//32874O2411/32874O2411S6D36748/17198134610038733/2201057187_32874O2411S6D36748E4.html";

pub(crate) const FALLBACK_ROLL_NUMBER: &str = "2201057187";
pub(crate) const FALLBACK_REGISTRATION: &str = "32874O2411S6D36748";

pub(crate) fn template_header() -> CandidateHeader {
    CandidateHeader {
        name: "RAJESH KUMAR SHARMA".to_string(),
        roll_number: FALLBACK_ROLL_NUMBER.to_string(),
        registration_number: FALLBACK_REGISTRATION.to_string(),
        exam_name: "SSC CHSL (10+2) Tier-I Examination 2024".to_string(),
        exam_date: "July 15, 2024".to_string(),
        exam_time: "09:00 AM - 10:00 AM".to_string(),
        test_venue: "ABCD COMPUTER CENTER, NEW DELHI".to_string(),
        total_questions: 100,
        total_marks: 200,
        status: "APPEARED".to_string(),
    }
}

fn section(
    name: &str,
    attempted: u32,
    correct: u32,
    wrong: u32,
    unattempted: u32,
    marks: u32,
    accuracy: f64,
) -> SectionScore {
    SectionScore {
        name: name.to_string(),
        total_questions: 25,
        total_marks: 50,
        attempted,
        correct,
        wrong,
        unattempted,
        marks,
        accuracy,
    }
}

pub(crate) fn template_sections() -> Vec<SectionScore> {
    vec![
        section("General Intelligence and Reasoning", 23, 18, 5, 2, 36, 78.26),
        section("General Awareness", 24, 16, 8, 1, 32, 66.67),
        section("Quantitative Aptitude", 22, 15, 7, 3, 30, 68.18),
        section("English Language", 25, 20, 5, 0, 40, 80.00),
    ]
}

/// The template as a complete record (fallback identifiers, fixed name).
pub fn sample_record() -> ResultRecord {
    // Template data is constant and consistent; a failure here is a bug in
    // the table above.
    ResultRecord::new(template_header(), template_sections())
        .unwrap_or_else(|e| panic!("sample template is inconsistent: {e}"))
}
