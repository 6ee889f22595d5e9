use crate::domain::entities::{ClinicalNote, ImagingReport, LabResult, PatientRecords};
use crate::domain::ports::store::{RecordStore, StoreError};

/// Text and labs gathered for one patient, ready for signal extraction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedRecords {
    /// Lowercased content of imaging-category reports, space-joined.
    pub imaging_text: String,
    /// Lowercased content of every clinical note, space-joined.
    pub clinical_notes: String,
    pub labs: Vec<LabResult>,
}

/// Fetch all records for a patient.
///
/// # Errors
///
/// Returns `StoreError` if any of the three reads fails.
pub fn fetch_records(store: &dyn RecordStore, patient_id: &str) -> Result<PatientRecords, StoreError> {
    Ok(PatientRecords {
        reports: store.fetch_reports(patient_id)?,
        labs: store.fetch_labs(patient_id)?,
        notes: store.fetch_notes(patient_id)?,
    })
}

/// Collapse a patient's records into text blobs.
///
/// Returns `None` when the patient has no records of any kind. Reports with
/// a missing or unrecognized category still count as data but stay out of
/// the imaging text.
#[must_use]
pub fn aggregate(records: PatientRecords) -> Option<AggregatedRecords> {
    if records.is_empty() {
        return None;
    }

    Some(AggregatedRecords {
        imaging_text: imaging_text(&records.reports),
        clinical_notes: notes_text(&records.notes),
        labs: records.labs,
    })
}

fn imaging_text(reports: &[ImagingReport]) -> String {
    reports
        .iter()
        .filter(|r| r.is_imaging())
        .map(|r| r.content.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

fn notes_text(notes: &[ClinicalNote]) -> String {
    notes
        .iter()
        .map(|n| n.content.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
