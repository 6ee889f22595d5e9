use anyhow::Context;
use colored::Colorize;

use crate::domain::ports::store::RecordWriter;
use crate::domain::value_objects::report_category::ReportCategory;
use crate::presentation::cli::formatters::alert_fmt::sanitize_terminal;

fn require(field: &str, value: &str) -> anyhow::Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{field} must not be empty");
    }
    Ok(())
}

fn print_stored(kind: &str, patient_id: &str, id: &uuid::Uuid) {
    println!(
        "{} {kind} {} for patient {}",
        "✓".green().bold(),
        id.to_string().dimmed(),
        sanitize_terminal(patient_id)
    );
}

/// Stores an imaging report. Unknown categories are kept as `unrecognized`.
///
/// # Errors
///
/// Returns an error if an argument is blank or the write fails.
pub fn run_add_report(
    writer: &dyn RecordWriter,
    patient_id: &str,
    category: &str,
    content: &str,
) -> anyhow::Result<()> {
    require("patient id", patient_id)?;
    require("content", content)?;

    let category = ReportCategory::parse(category);
    if !category.is_imaging() {
        tracing::warn!(
            "Category not recognized as imaging, report will not feed the analysis"
        );
    }

    let report = writer
        .add_report(patient_id.trim(), Some(category), content)
        .context("failed to store report")?;
    print_stored("report", &report.patient_id, &report.id);
    Ok(())
}

/// Stores a numeric lab result.
///
/// # Errors
///
/// Returns an error if an argument is blank, the value is not finite, or the
/// write fails.
pub fn run_add_lab(
    writer: &dyn RecordWriter,
    patient_id: &str,
    test_name: &str,
    value: f64,
    unit: &str,
) -> anyhow::Result<()> {
    require("patient id", patient_id)?;
    require("test name", test_name)?;
    if !value.is_finite() {
        anyhow::bail!("lab value must be a finite number");
    }

    let lab = writer
        .add_lab(patient_id.trim(), Some(test_name.trim()), value, unit.trim())
        .context("failed to store lab result")?;
    print_stored("lab result", &lab.patient_id, &lab.id);
    Ok(())
}

/// Stores a free-text clinical note.
///
/// # Errors
///
/// Returns an error if an argument is blank or the write fails.
pub fn run_add_note(writer: &dyn RecordWriter, patient_id: &str, content: &str) -> anyhow::Result<()> {
    require("patient id", patient_id)?;
    require("content", content)?;

    let note = writer
        .add_note(patient_id.trim(), content)
        .context("failed to store note")?;
    print_stored("note", &note.patient_id, &note.id);
    Ok(())
}
