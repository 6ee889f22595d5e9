use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::severity::Severity;

/// Durable record of one discrepancy finding. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    pub patient_id: String,
    pub severity: Severity,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Alert {
    #[must_use]
    pub fn new(patient_id: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id: patient_id.into(),
            severity,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}
