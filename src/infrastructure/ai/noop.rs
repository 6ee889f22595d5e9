use async_trait::async_trait;

use crate::domain::ports::{ExplanationError, ExplanationRequest, ExplanationService};

/// Explanation service that always answers with an empty string.
///
/// Used when AI is disabled or the configured provider is unusable; the
/// insight generator then substitutes its fallback text.
pub struct NoopExplainer;

impl NoopExplainer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for NoopExplainer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExplanationService for NoopExplainer {
    async fn generate_explanation(
        &self,
        _request: &ExplanationRequest,
    ) -> Result<String, ExplanationError> {
        Ok(String::new())
    }
}
