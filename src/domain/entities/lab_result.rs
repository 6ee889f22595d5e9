use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single numeric laboratory measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResult {
    pub id: Uuid,
    pub patient_id: String,
    /// Free-text test name, matched case-insensitively. `None` when missing.
    pub test_name: Option<String>,
    pub value: f64,
    pub unit: String,
    pub created_at: DateTime<Utc>,
}

impl LabResult {
    #[must_use]
    pub fn new(
        patient_id: impl Into<String>,
        test_name: Option<String>,
        value: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id: patient_id.into(),
            test_name,
            value,
            unit: unit.into(),
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive test name comparison. Unnamed results never match.
    #[must_use]
    pub fn is_test(&self, name: &str) -> bool {
        self.test_name
            .as_deref()
            .is_some_and(|n| n.eq_ignore_ascii_case(name))
    }
}
