use anyhow::Context;

use crate::application::services::analysis::{AlertResponse, AnalysisService};
use crate::presentation::cli::formatters::alert_fmt;

/// Runs the discrepancy analysis for one patient and prints the response.
///
/// # Errors
///
/// Returns an error if the records cannot be read, the alert cannot be
/// persisted, or JSON serialization fails.
pub async fn run_analyze(
    service: &AnalysisService<'_>,
    patient_id: &str,
    json: bool,
) -> anyhow::Result<()> {
    let patient_id = patient_id.trim();
    if patient_id.is_empty() {
        anyhow::bail!("patient id must not be empty");
    }

    let outcome = service
        .analyze(patient_id)
        .await
        .with_context(|| format!("analysis failed for patient {patient_id}"))?;
    let response = outcome.to_response();

    if json {
        print_response_json(&response)?;
    } else {
        alert_fmt::print_response(patient_id, &response);
    }

    Ok(())
}

fn print_response_json(response: &[AlertResponse]) -> anyhow::Result<()> {
    let output = serde_json::to_string_pretty(response)?;
    println!("{output}");
    Ok(())
}
