//! Terminal rendition of a result: candidate card, marks table, and question
//! analysis.

use std::fmt::Write;

use crate::aggregate::{penalty, round_to, Accuracy};
use crate::model::ResultRecord;

use super::ReportOptions;

fn band_suffix(acc: Accuracy) -> String {
    acc.band()
        .map(|b| format!(" ({})", b.as_str()))
        .unwrap_or_default()
}

fn pct_or_na(pct: Option<f64>) -> String {
    pct.map(|p| format!("{p:.1}%"))
        .unwrap_or_else(|| "N/A".to_string())
}

fn acc_cell(acc: Accuracy) -> String {
    match acc {
        Accuracy::Percent(_) => format!("{acc}%"),
        Accuracy::NotApplicable => acc.to_string(),
    }
}

/// Renders the record for a terminal. Infallible; writes go to a `String`.
pub fn render_text(record: &ResultRecord, opts: &ReportOptions) -> String {
    let h = record.header();
    let t = record.totals();
    let mut out = String::new();

    let _ = writeln!(out, "{}", opts.title);
    let _ = writeln!(out, "{}", "=".repeat(opts.title.chars().count()));
    let _ = writeln!(out, "Candidate:     {}", h.name);
    let _ = writeln!(out, "Roll Number:   {}", h.roll_number);
    let _ = writeln!(out, "Registration:  {}", h.registration_number);
    let _ = writeln!(out, "Status:        {}", h.status);
    let _ = writeln!(out, "Examination:   {}", h.exam_name);
    let _ = writeln!(out, "Date / Time:   {} | {}", h.exam_date, h.exam_time);
    let _ = writeln!(out, "Venue:         {}", h.test_venue);
    out.push('\n');

    let name_width = record
        .sections()
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Section".len());

    let _ = writeln!(
        out,
        "{:<w$}  {:>6}  {:>5}  {:>7}  {:>8}",
        "Section",
        "Marks",
        "Total",
        "Pct",
        "Accuracy",
        w = name_width
    );
    let _ = writeln!(out, "{}", "-".repeat(name_width + 38));
    for s in record.sections() {
        let acc = Accuracy::Percent(s.accuracy);
        let _ = writeln!(
            out,
            "{:<w$}  {:>6}  {:>5}  {:>7}  {:>8}{}",
            s.name,
            s.marks,
            s.total_marks,
            pct_or_na(s.marks_percentage()),
            acc_cell(acc),
            band_suffix(acc),
            w = name_width
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(name_width + 38));
    let _ = writeln!(
        out,
        "{:<w$}  {:>6}  {:>5}  {:>7}  {:>8}{}",
        "Total",
        t.total_marks_obtained,
        h.total_marks,
        pct_or_na(record.overall_percentage()),
        acc_cell(t.overall_accuracy),
        band_suffix(t.overall_accuracy),
        w = name_width
    );
    out.push('\n');

    let _ = writeln!(out, "Question Analysis");
    let _ = writeln!(
        out,
        "  Correct:      {:>4}  ({} attempted)",
        t.total_correct, t.total_attempted
    );
    let _ = writeln!(
        out,
        "  Wrong:        {:>4}  (-{:.1} penalty)",
        t.total_wrong,
        round_to(penalty(t.total_wrong, opts.penalty_per_wrong), 1)
    );
    let _ = writeln!(out, "  Unattempted:  {:>4}", t.total_unattempted);

    for s in record.sections() {
        let _ = writeln!(
            out,
            "  {}: correct {}, wrong {}, unattempted {}, accuracy {:.2}%",
            s.name, s.correct, s.wrong, s.unattempted, s.accuracy
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::sample_record;

    #[test]
    fn shows_candidate_and_totals() {
        let text = render_text(&sample_record(), &ReportOptions::default());
        assert!(text.starts_with("SSC Examination Result Analysis\n"));
        assert!(text.contains("Roll Number:   2201057187"));
        assert!(text.contains("Venue:         ABCD COMPUTER CENTER, NEW DELHI"));
        assert!(text.contains("73.40% (good)"));
        assert!(text.contains("69.0%"));
        assert!(text.contains("(-12.5 penalty)"));
    }

    #[test]
    fn section_rows_carry_bands() {
        let text = render_text(&sample_record(), &ReportOptions::default());
        let english = text
            .lines()
            .find(|l| l.starts_with("English Language"))
            .unwrap();
        assert!(english.ends_with("80.00% (excellent)"));
    }
}
