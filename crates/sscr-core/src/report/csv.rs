//! Fixed-layout CSV report.
//!
//! Three blocks separated by blank lines: candidate header, section table,
//! question summary. Fields are quoted only when they contain `,`, `"`, CR or
//! LF (RFC 4180), so plain identifiers are written literally.

use std::fmt::Write;

use crate::aggregate::{penalty, round_to, Accuracy};
use crate::model::ResultRecord;

use super::ReportOptions;

const SECTION_COLUMNS: [&str; 9] = [
    "Section",
    "Marks Obtained",
    "Total Marks",
    "Percentage",
    "Attempted",
    "Correct",
    "Wrong",
    "Unattempted",
    "Accuracy",
];

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Quotes a single field if required.
pub fn escape_field(field: &str) -> String {
    if needs_quotes(field) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S]) {
    let mut first = true;
    for cell in cells {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&escape_field(cell.as_ref()));
    }
    out.push('\n');
}

fn push_pair(out: &mut String, label: &str, value: &str) {
    push_row(out, &[label, value]);
}

/// `72.34%` or `N/A`.
fn percent_cell(acc: Accuracy) -> String {
    match acc {
        Accuracy::Percent(_) => format!("{acc}%"),
        Accuracy::NotApplicable => acc.to_string(),
    }
}

/// Renders the record as CSV text.
pub fn format_csv(record: &ResultRecord, opts: &ReportOptions) -> String {
    let h = record.header();
    let t = record.totals();
    let mut out = String::new();

    out.push_str(&escape_field(&opts.title));
    out.push('\n');
    push_pair(&mut out, "Candidate Name", &h.name);
    push_pair(&mut out, "Roll Number", &h.roll_number);
    push_pair(&mut out, "Registration Number", &h.registration_number);
    push_pair(&mut out, "Examination", &h.exam_name);
    push_pair(&mut out, "Exam Date", &h.exam_date);
    push_pair(
        &mut out,
        "Total Marks Obtained",
        &format!("{}/{}", t.total_marks_obtained, h.total_marks),
    );
    push_pair(&mut out, "Overall Accuracy", &percent_cell(t.overall_accuracy));
    push_pair(&mut out, "Status", &h.status);
    out.push('\n');

    out.push_str("Section-wise Performance\n");
    push_row(&mut out, &SECTION_COLUMNS);
    for s in record.sections() {
        let pct = s
            .marks_percentage()
            .map(|p| format!("{p:.1}%"))
            .unwrap_or_else(|| "N/A".to_string());
        push_row(
            &mut out,
            &[
                s.name.clone(),
                s.marks.to_string(),
                s.total_marks.to_string(),
                pct,
                s.attempted.to_string(),
                s.correct.to_string(),
                s.wrong.to_string(),
                s.unattempted.to_string(),
                format!("{}%", s.accuracy),
            ],
        );
    }
    out.push('\n');

    out.push_str("Overall Question Analysis\n");
    push_pair(&mut out, "Total Questions", &h.total_questions.to_string());
    push_pair(&mut out, "Total Attempted", &t.total_attempted.to_string());
    push_pair(&mut out, "Correct Answers", &t.total_correct.to_string());
    push_pair(&mut out, "Wrong Answers", &t.total_wrong.to_string());
    push_pair(&mut out, "Unattempted Questions", &t.total_unattempted.to_string());
    let _ = writeln!(
        out,
        "Penalty Marks,{:.1}",
        round_to(penalty(t.total_wrong, opts.penalty_per_wrong), 1)
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::sample_record;
    use crate::model::{CandidateHeader, SectionScore};

    fn lines(csv: &str) -> Vec<&str> {
        csv.lines().collect()
    }

    #[test]
    fn header_block_is_literal() {
        let rec = sample_record();
        let csv = format_csv(&rec, &ReportOptions::default());
        let l = lines(&csv);
        assert_eq!(l[0], "SSC Examination Result Analysis");
        assert!(l.contains(&"Roll Number,2201057187"));
        assert!(l.contains(&"Registration Number,32874O2411S6D36748"));
        assert!(l.contains(&"Total Marks Obtained,138/200"));
        assert!(l.contains(&"Overall Accuracy,73.40%"));
        assert!(l.contains(&"Status,APPEARED"));
    }

    #[test]
    fn section_rows_and_summary() {
        let rec = sample_record();
        let csv = format_csv(&rec, &ReportOptions::default());
        let l = lines(&csv);
        assert!(l.contains(
            &"Section,Marks Obtained,Total Marks,Percentage,Attempted,Correct,Wrong,Unattempted,Accuracy"
        ));
        assert!(l.contains(&"General Intelligence and Reasoning,36,50,72.0%,23,18,5,2,78.26%"));
        assert!(l.contains(&"English Language,40,50,80.0%,25,20,5,0,80%"));
        assert!(l.contains(&"Total Questions,100"));
        assert!(l.contains(&"Wrong Answers,25"));
        assert_eq!(*l.last().unwrap(), "Penalty Marks,12.5");
    }

    #[test]
    fn blocks_separated_by_blank_lines() {
        let csv = format_csv(&sample_record(), &ReportOptions::default());
        assert!(csv.contains("Status,APPEARED\n\nSection-wise Performance\n"));
        assert!(csv.contains("\n\nOverall Question Analysis\n"));
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn free_text_with_commas_is_quoted() {
        let rec = sample_record();
        let mut header = rec.header().clone();
        header.exam_name = "CHSL, Tier \"I\"".into();
        let rec = ResultRecord::new(header, rec.sections().to_vec()).unwrap();
        let csv = format_csv(&rec, &ReportOptions::default());
        assert!(csv.contains("Examination,\"CHSL, Tier \"\"I\"\"\"\n"));
    }

    #[test]
    fn no_attempts_renders_not_applicable() {
        let header = CandidateHeader {
            name: "A".into(),
            roll_number: "1".into(),
            registration_number: "2".into(),
            exam_name: "E".into(),
            exam_date: "D".into(),
            exam_time: "T".into(),
            test_venue: "V".into(),
            total_questions: 0,
            total_marks: 0,
            status: "ABSENT".into(),
        };
        let rec = ResultRecord::new(header, Vec::<SectionScore>::new()).unwrap();
        let csv = format_csv(&rec, &ReportOptions::default());
        assert!(csv.contains("Overall Accuracy,N/A\n"));
        assert!(csv.contains("Penalty Marks,0.0\n"));
        assert!(!csv.contains("NaN"));
    }

    #[test]
    fn custom_penalty() {
        let opts = ReportOptions {
            penalty_per_wrong: 1.0,
            ..ReportOptions::default()
        };
        let csv = format_csv(&sample_record(), &opts);
        assert!(csv.ends_with("Penalty Marks,25.0\n"));
    }

    #[test]
    fn one_decimal_ties_round_up() {
        let header = CandidateHeader {
            name: "A".into(),
            roll_number: "1".into(),
            registration_number: "2".into(),
            exam_name: "E".into(),
            exam_date: "D".into(),
            exam_time: "T".into(),
            test_venue: "V".into(),
            total_questions: 40,
            total_marks: 80,
            status: "APPEARED".into(),
        };
        let section = SectionScore {
            name: "S".into(),
            total_questions: 40,
            marks: 29,
            total_marks: 80,
            attempted: 1,
            correct: 0,
            wrong: 1,
            unattempted: 39,
            accuracy: 0.0,
        };
        let rec = ResultRecord::new(header, vec![section]).unwrap();
        assert_eq!(rec.overall_percentage(), Some(36.3));

        let opts = ReportOptions {
            penalty_per_wrong: 0.25,
            ..ReportOptions::default()
        };
        let csv = format_csv(&rec, &opts);
        assert!(lines(&csv).contains(&"S,29,80,36.3%,1,0,1,39,0%"));
        assert!(csv.ends_with("Penalty Marks,0.3\n"));

        let text = crate::report::render_text(&rec, &opts);
        assert!(text.contains("36.3%"));
        assert!(!text.contains("36.2%"));
        assert!(text.contains("(-0.3 penalty)"));
    }
}
