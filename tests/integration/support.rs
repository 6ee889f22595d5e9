use std::sync::Mutex;

use async_trait::async_trait;

use clinwatch::domain::entities::{Alert, PatientRecords};
use clinwatch::domain::ports::{
    AlertStore, ExplanationError, ExplanationRequest, ExplanationService, StoreError,
};
use clinwatch::domain::value_objects::Severity;

// ---------------------------------------------------------------------------
// Fixture loader
// ---------------------------------------------------------------------------

pub fn load_fixture(name: &str) -> PatientRecords {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let json = std::fs::read_to_string(&path).expect("Failed to read fixture");
    serde_json::from_str(&json).expect("Failed to parse fixture")
}

// ---------------------------------------------------------------------------
// Explanation stubs
// ---------------------------------------------------------------------------

/// Replies with fixed text and remembers every request it saw.
pub struct RecordingExplainer {
    reply: String,
    requests: Mutex<Vec<ExplanationRequest>>,
}

impl RecordingExplainer {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ExplanationRequest> {
        self.requests.lock().expect("lock").clone()
    }
}

#[async_trait]
impl ExplanationService for RecordingExplainer {
    async fn generate_explanation(
        &self,
        request: &ExplanationRequest,
    ) -> Result<String, ExplanationError> {
        self.requests.lock().expect("lock").push(request.clone());
        Ok(self.reply.clone())
    }
}

pub struct FailingExplainer;

#[async_trait]
impl ExplanationService for FailingExplainer {
    async fn generate_explanation(
        &self,
        _request: &ExplanationRequest,
    ) -> Result<String, ExplanationError> {
        Err(ExplanationError::RateLimited)
    }
}

// ---------------------------------------------------------------------------
// FailingAlertStore
// ---------------------------------------------------------------------------

pub struct FailingAlertStore;

impl AlertStore for FailingAlertStore {
    fn create_alert(
        &self,
        _patient_id: &str,
        _severity: Severity,
        _message: &str,
    ) -> Result<Alert, StoreError> {
        Err(StoreError::WriteFailed("disk full".into()))
    }

    fn alerts_for_patient(&self, _patient_id: &str) -> Result<Vec<Alert>, StoreError> {
        Ok(Vec::new())
    }

    fn all_alerts(&self) -> Result<Vec<Alert>, StoreError> {
        Ok(Vec::new())
    }
}
