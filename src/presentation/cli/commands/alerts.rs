use anyhow::Context;

use crate::domain::entities::Alert;
use crate::domain::ports::store::AlertStore;
use crate::presentation::cli::formatters::alert_fmt;

/// Lists a patient's alert history, newest first.
///
/// # Errors
///
/// Returns an error if the store query fails or JSON serialization fails.
pub fn run_alerts(
    store: &dyn AlertStore,
    patient_id: &str,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    if limit == Some(0) {
        anyhow::bail!("limit must be greater than 0");
    }

    let alerts = load_alerts(store, patient_id, limit)?;

    if json {
        let output = serde_json::to_string_pretty(&alerts)?;
        println!("{output}");
    } else {
        alert_fmt::print_alert_history(patient_id, &alerts);
    }

    Ok(())
}

fn load_alerts(
    store: &dyn AlertStore,
    patient_id: &str,
    limit: Option<usize>,
) -> anyhow::Result<Vec<Alert>> {
    let mut alerts = store
        .alerts_for_patient(patient_id)
        .with_context(|| format!("failed to read alerts for patient {patient_id}"))?;
    if let Some(limit) = limit {
        alerts.truncate(limit);
    }
    Ok(alerts)
}
