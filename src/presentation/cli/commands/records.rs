use anyhow::Context;

use crate::application::services::aggregator::fetch_records;
use crate::domain::ports::store::RecordStore;
use crate::presentation::cli::formatters::record_fmt;

/// Prints every report, lab result and note held for a patient.
///
/// # Errors
///
/// Returns an error if the store query fails or JSON serialization fails.
pub fn run_records(store: &dyn RecordStore, patient_id: &str, json: bool) -> anyhow::Result<()> {
    let records = fetch_records(store, patient_id)
        .with_context(|| format!("failed to read records for patient {patient_id}"))?;

    if json {
        let output = serde_json::to_string_pretty(&records)?;
        println!("{output}");
    } else {
        record_fmt::print_records(patient_id, &records);
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::ports::store::RecordWriter;
    use crate::infrastructure::persistence::in_memory_store::InMemoryStore;
    use colored::control;

    #[test]
    fn run_records_handles_unknown_patient() {
        control::set_override(false);
        let store = InMemoryStore::new();
        assert!(run_records(&store, "ghost", false).is_ok());
        assert!(run_records(&store, "ghost", true).is_ok());
    }

    #[test]
    fn run_records_prints_stored_data() {
        control::set_override(false);
        let store = InMemoryStore::new();
        store.add_note("p1", "afebrile").expect("add");
        store.add_lab("p1", Some("WBC"), 9000.0, "cells/mm3").expect("add");
        assert!(run_records(&store, "p1", false).is_ok());
    }
}
