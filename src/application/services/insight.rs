use std::time::Duration;

use crate::domain::ports::explainer::{ExplanationError, ExplanationRequest, ExplanationService};
use crate::domain::rules::ClinicalSignal;

/// Substituted whenever the explanation service fails, times out or
/// returns nothing.
pub const FALLBACK_EXPLANATION: &str = "Radiology findings appear inconsistent with laboratory \
     markers. Elevated inflammatory values despite normal imaging may warrant clinical \
     correlation and further evaluation.";

pub const NO_IMAGING_PLACEHOLDER: &str = "No radiology findings available.";
pub const NO_LABS_PLACEHOLDER: &str = "No inflammatory markers available.";
pub const NO_NOTES_PLACEHOLDER: &str = "No clinical notes available.";

/// Builds the explanation context, substituting placeholders for empty sections.
#[must_use]
pub fn build_request(
    imaging_text: &str,
    signal: &ClinicalSignal,
    clinical_notes: &str,
) -> ExplanationRequest {
    ExplanationRequest {
        imaging_text: non_empty_or(imaging_text, NO_IMAGING_PLACEHOLDER),
        lab_summary: signal
            .lab_summary()
            .unwrap_or_else(|| NO_LABS_PLACEHOLDER.to_string()),
        clinical_notes: non_empty_or(clinical_notes, NO_NOTES_PLACEHOLDER),
    }
}

fn non_empty_or(text: &str, placeholder: &str) -> String {
    if text.trim().is_empty() {
        placeholder.to_string()
    } else {
        text.to_string()
    }
}

/// Wraps an [`ExplanationService`] so that callers always get text back.
pub struct InsightGenerator<'a> {
    service: &'a dyn ExplanationService,
    timeout: Duration,
}

impl<'a> InsightGenerator<'a> {
    #[must_use]
    pub const fn new(service: &'a dyn ExplanationService, timeout: Duration) -> Self {
        Self { service, timeout }
    }

    /// Returns the generated explanation, or [`FALLBACK_EXPLANATION`] on
    /// any failure. Never errors.
    pub async fn explain(&self, request: &ExplanationRequest) -> String {
        match self.try_explain(request).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Explanation unavailable, using fallback: {e}");
                FALLBACK_EXPLANATION.to_string()
            }
        }
    }

    async fn try_explain(&self, request: &ExplanationRequest) -> Result<String, ExplanationError> {
        let text = tokio::time::timeout(self.timeout, self.service.generate_explanation(request))
            .await
            .map_err(|_| ExplanationError::Timeout)??;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ExplanationError::InvalidResponse(
                "empty explanation".into(),
            ));
        }
        Ok(trimmed.to_string())
    }
}
