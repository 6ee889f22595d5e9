use std::fmt::Write;

use crate::domain::ports::ExplanationRequest;

pub struct PromptBuilder;

impl PromptBuilder {
    #[must_use]
    pub fn build(request: &ExplanationRequest) -> String {
        let mut prompt = String::with_capacity(
            1024 + request.imaging_text.len()
                + request.lab_summary.len()
                + request.clinical_notes.len(),
        );

        prompt.push_str(
            "You are a clinical decision support assistant helping physicians \
             review possibly contradictory patient findings.\n\n",
        );

        let _ = write!(
            prompt,
            "## Imaging Reports\n{}\n\n\
             ## Laboratory Findings\n{}\n\n\
             ## Clinical Notes\n{}\n\n",
            request.imaging_text.trim(),
            request.lab_summary.trim(),
            request.clinical_notes.trim(),
        );

        prompt.push_str(
            "## Task\n\
             - Point out contradictions between the imaging and laboratory data\n\
             - Explain the possible clinical concern\n\
             - Use cautious, non-diagnostic language and do NOT give a diagnosis\n\
             - Say why clinician review is warranted\n\n\
             Respond with a short professional explanation of 3 to 5 sentences, \
             plain text only.\n",
        );

        prompt
    }
}
