use serde::{Deserialize, Serialize};

use super::{ClinicalNote, ImagingReport, LabResult};

/// Everything the store holds for one patient, in store iteration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientRecords {
    #[serde(default)]
    pub reports: Vec<ImagingReport>,
    #[serde(default)]
    pub labs: Vec<LabResult>,
    #[serde(default)]
    pub notes: Vec<ClinicalNote>,
}

impl PatientRecords {
    /// True when the patient has no reports, labs or notes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty() && self.labs.is_empty() && self.notes.is_empty()
    }
}
