use crate::domain::entities::lab_result::LabResult;

/// Phrases in imaging text that indicate the reader found no infection.
pub const INFECTION_NEGATIVE_PHRASES: &[&str] = &[
    "no infection",
    "no evidence of infection",
    "no signs of infection",
    "no acute infection",
];

pub const CRP_TEST: &str = "CRP";
pub const WBC_TEST: &str = "WBC";

/// Classifier input distilled from a patient's records.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClinicalSignal {
    pub crp: Option<f64>,
    pub wbc: Option<f64>,
    pub infection_negative: bool,
}

impl ClinicalSignal {
    /// Extracts markers and the infection-negative flag. Never fails.
    ///
    /// When several results share a marker name, the one seen last in
    /// `labs` wins. Stores give no temporal ordering guarantee, so this is
    /// insertion order at best.
    #[must_use]
    pub fn extract(imaging_text: &str, labs: &[LabResult]) -> Self {
        let mut crp = None;
        let mut wbc = None;

        for lab in labs {
            if lab.is_test(CRP_TEST) {
                crp = Some(lab.value);
            } else if lab.is_test(WBC_TEST) {
                wbc = Some(lab.value);
            }
        }

        Self {
            crp,
            wbc,
            infection_negative: is_infection_negative(imaging_text),
        }
    }

    #[must_use]
    pub const fn has_markers(&self) -> bool {
        self.crp.is_some() || self.wbc.is_some()
    }

    /// Human-readable marker summary, e.g. `CRP: 120 mg/L, WBC: 16000 cells/mm3`.
    /// `None` when neither marker is present.
    #[must_use]
    pub fn lab_summary(&self) -> Option<String> {
        let mut parts = Vec::with_capacity(2);
        if let Some(crp) = self.crp {
            parts.push(format!("CRP: {crp} mg/L"));
        }
        if let Some(wbc) = self.wbc {
            parts.push(format!("WBC: {wbc} cells/mm3"));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Case-insensitive substring match against [`INFECTION_NEGATIVE_PHRASES`].
#[must_use]
pub fn is_infection_negative(imaging_text: &str) -> bool {
    if imaging_text.is_empty() {
        return false;
    }
    let text = imaging_text.to_lowercase();
    INFECTION_NEGATIVE_PHRASES
        .iter()
        .any(|phrase| text.contains(phrase))
}
