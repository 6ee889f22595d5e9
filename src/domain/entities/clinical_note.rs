use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalNote {
    pub id: Uuid,
    pub patient_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ClinicalNote {
    #[must_use]
    pub fn new(patient_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id: patient_id.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
