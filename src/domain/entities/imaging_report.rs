use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::report_category::ReportCategory;

/// A free-text imaging report filed for a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagingReport {
    pub id: Uuid,
    pub patient_id: String,
    /// `None` when the report was filed without a category.
    pub category: Option<ReportCategory>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ImagingReport {
    #[must_use]
    pub fn new(
        patient_id: impl Into<String>,
        category: Option<ReportCategory>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id: patient_id.into(),
            category,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Whether this report's text belongs in the imaging blob.
    #[must_use]
    pub fn is_imaging(&self) -> bool {
        self.category.is_some_and(|c| c.is_imaging())
    }
}
