use std::sync::Mutex;

use crate::domain::entities::{Alert, ClinicalNote, ImagingReport, LabResult, PatientRecords};
use crate::domain::ports::store::{AlertStore, RecordStore, RecordWriter, StoreError};
use crate::domain::value_objects::report_category::ReportCategory;
use crate::domain::value_objects::severity::Severity;

/// In-memory store for tests and fixture-driven runs.
pub struct InMemoryStore {
    reports: Mutex<Vec<ImagingReport>>,
    labs: Mutex<Vec<LabResult>>,
    notes: Mutex<Vec<ClinicalNote>>,
    alerts: Mutex<Vec<Alert>>,
}

impl InMemoryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reports: Mutex::new(Vec::new()),
            labs: Mutex::new(Vec::new()),
            notes: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
        }
    }

    /// Build a store pre-seeded with the given records.
    #[must_use]
    pub fn from_records(records: PatientRecords) -> Self {
        Self {
            reports: Mutex::new(records.reports),
            labs: Mutex::new(records.labs),
            notes: Mutex::new(records.notes),
            alerts: Mutex::new(Vec::new()),
        }
    }

    pub fn insert_report(&self, report: ImagingReport) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push(report);
        }
    }

    pub fn insert_lab(&self, lab: LabResult) {
        if let Ok(mut labs) = self.labs.lock() {
            labs.push(lab);
        }
    }

    pub fn insert_note(&self, note: ClinicalNote) {
        if let Ok(mut notes) = self.notes.lock() {
            notes.push(note);
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn filter_patient<T: Clone>(
    items: &Mutex<Vec<T>>,
    patient_id: &str,
    owner: fn(&T) -> &str,
) -> Result<Vec<T>, StoreError> {
    Ok(items
        .lock()
        .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?
        .iter()
        .filter(|item| owner(item) == patient_id)
        .cloned()
        .collect())
}

fn push<T: Clone>(items: &Mutex<Vec<T>>, item: T) -> Result<T, StoreError> {
    items
        .lock()
        .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?
        .push(item.clone());
    Ok(item)
}

impl RecordStore for InMemoryStore {
    fn fetch_reports(&self, patient_id: &str) -> Result<Vec<ImagingReport>, StoreError> {
        filter_patient(&self.reports, patient_id, |r| r.patient_id.as_str())
    }

    fn fetch_labs(&self, patient_id: &str) -> Result<Vec<LabResult>, StoreError> {
        filter_patient(&self.labs, patient_id, |l| l.patient_id.as_str())
    }

    fn fetch_notes(&self, patient_id: &str) -> Result<Vec<ClinicalNote>, StoreError> {
        filter_patient(&self.notes, patient_id, |n| n.patient_id.as_str())
    }
}

impl RecordWriter for InMemoryStore {
    fn add_report(
        &self,
        patient_id: &str,
        category: Option<ReportCategory>,
        content: &str,
    ) -> Result<ImagingReport, StoreError> {
        push(
            &self.reports,
            ImagingReport::new(patient_id, category, content),
        )
    }

    fn add_lab(
        &self,
        patient_id: &str,
        test_name: Option<&str>,
        value: f64,
        unit: &str,
    ) -> Result<LabResult, StoreError> {
        push(
            &self.labs,
            LabResult::new(patient_id, test_name.map(str::to_string), value, unit),
        )
    }

    fn add_note(&self, patient_id: &str, content: &str) -> Result<ClinicalNote, StoreError> {
        push(&self.notes, ClinicalNote::new(patient_id, content))
    }
}

impl AlertStore for InMemoryStore {
    fn create_alert(
        &self,
        patient_id: &str,
        severity: Severity,
        message: &str,
    ) -> Result<Alert, StoreError> {
        push(&self.alerts, Alert::new(patient_id, severity, message))
    }

    fn alerts_for_patient(&self, patient_id: &str) -> Result<Vec<Alert>, StoreError> {
        let mut alerts = filter_patient(&self.alerts, patient_id, |a| a.patient_id.as_str())?;
        alerts.reverse();
        Ok(alerts)
    }

    fn all_alerts(&self) -> Result<Vec<Alert>, StoreError> {
        let mut alerts = self
            .alerts
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?
            .clone();
        alerts.reverse();
        Ok(alerts)
    }
}
