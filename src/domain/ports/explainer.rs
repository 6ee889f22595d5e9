use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplanationError {
    #[error("explanation service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("invalid response from explanation service: {0}")]
    InvalidResponse(String),
    #[error("rate limited")]
    RateLimited,
    #[error("explanation timed out")]
    Timeout,
}

/// Context handed to the explanation service. Every field is non-empty:
/// missing sections carry a placeholder sentence instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationRequest {
    pub imaging_text: String,
    pub lab_summary: String,
    pub clinical_notes: String,
}

#[async_trait]
pub trait ExplanationService: Send + Sync {
    /// Produce a short natural-language explanation of the discrepancy.
    ///
    /// An empty `Ok` is allowed; callers decide what to do with it.
    ///
    /// # Errors
    ///
    /// Returns `ExplanationError` if the service is unavailable,
    /// the response is invalid, the request is rate-limited, or
    /// the call times out.
    async fn generate_explanation(
        &self,
        request: &ExplanationRequest,
    ) -> Result<String, ExplanationError>;
}
