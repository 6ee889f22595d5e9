use thiserror::Error;

use crate::domain::entities::{Alert, ClinicalNote, ImagingReport, LabResult};
use crate::domain::value_objects::report_category::ReportCategory;
use crate::domain::value_objects::severity::Severity;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage read failed: {0}")]
    ReadFailed(String),
    #[error("storage write failed: {0}")]
    WriteFailed(String),
    #[error("entry not found: {0}")]
    NotFound(String),
}

/// Read access to a patient's clinical records.
///
/// Unknown patient identifiers yield empty collections, never an error.
pub trait RecordStore: Send + Sync {
    /// All imaging reports for a patient, in store iteration order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn fetch_reports(&self, patient_id: &str) -> Result<Vec<ImagingReport>, StoreError>;

    /// All lab results for a patient, in store iteration order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn fetch_labs(&self, patient_id: &str) -> Result<Vec<LabResult>, StoreError>;

    /// All clinical notes for a patient, in store iteration order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn fetch_notes(&self, patient_id: &str) -> Result<Vec<ClinicalNote>, StoreError>;
}

/// Record ingestion. Records are immutable once written.
pub trait RecordWriter: Send + Sync {
    /// Store a new imaging report.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write operation fails.
    fn add_report(
        &self,
        patient_id: &str,
        category: Option<ReportCategory>,
        content: &str,
    ) -> Result<ImagingReport, StoreError>;

    /// Store a new lab result.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write operation fails.
    fn add_lab(
        &self,
        patient_id: &str,
        test_name: Option<&str>,
        value: f64,
        unit: &str,
    ) -> Result<LabResult, StoreError>;

    /// Store a new clinical note.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write operation fails.
    fn add_note(&self, patient_id: &str, content: &str) -> Result<ClinicalNote, StoreError>;
}

/// Append-only alert history.
pub trait AlertStore: Send + Sync {
    /// Create and durably persist a new alert. Never deduplicates.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write operation fails.
    fn create_alert(
        &self,
        patient_id: &str,
        severity: Severity,
        message: &str,
    ) -> Result<Alert, StoreError>;

    /// Alerts for one patient, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn alerts_for_patient(&self, patient_id: &str) -> Result<Vec<Alert>, StoreError>;

    /// Every stored alert, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn all_alerts(&self) -> Result<Vec<Alert>, StoreError>;
}
