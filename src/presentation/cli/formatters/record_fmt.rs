use colored::Colorize;

use crate::domain::entities::{ClinicalNote, ImagingReport, LabResult, PatientRecords};

use super::alert_fmt::{print_section_header, sanitize_terminal};

#[must_use]
pub fn format_report(report: &ImagingReport) -> String {
    let category = report
        .category
        .map_or_else(|| "uncategorized".to_string(), |c| c.to_string());
    format!(
        "[{}] {}",
        category.cyan(),
        sanitize_terminal(&report.content)
    )
}

#[must_use]
pub fn format_lab(lab: &LabResult) -> String {
    let name = lab.test_name.as_deref().unwrap_or("unnamed");
    format!(
        "{:<12} {:>10} {}",
        sanitize_terminal(name).bold(),
        lab.value,
        sanitize_terminal(&lab.unit)
    )
}

#[must_use]
pub fn format_note(note: &ClinicalNote) -> String {
    format!(
        "{} {}",
        note.created_at.format("%Y-%m-%d").to_string().dimmed(),
        sanitize_terminal(&note.content)
    )
}

/// Prints every record held for a patient, grouped by kind.
pub fn print_records(patient_id: &str, records: &PatientRecords) {
    print_section_header(&format!("Records for patient {}", sanitize_terminal(patient_id)));
    if records.is_empty() {
        println!();
        println!("{}", "No records found.".yellow());
        println!();
        return;
    }

    println!();
    println!("{} ({})", "Reports".bold(), records.reports.len());
    for report in &records.reports {
        println!("  {}", format_report(report));
    }

    println!();
    println!("{} ({})", "Labs".bold(), records.labs.len());
    for lab in &records.labs {
        println!("  {}", format_lab(lab));
    }

    println!();
    println!("{} ({})", "Notes".bold(), records.notes.len());
    for note in &records.notes {
        println!("  {}", format_note(note));
    }
    println!();
}
