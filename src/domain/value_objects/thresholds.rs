use serde::{Deserialize, Serialize};

/// Numeric cut-offs for inflammatory markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerThresholds {
    /// CRP (mg/L) strictly above which markers are critically elevated
    pub crp_critical: f64,
    /// CRP (mg/L) from which markers are moderately elevated (inclusive)
    pub crp_elevated: f64,
    /// WBC (cells/mm3) strictly above which markers are critically elevated
    pub wbc_critical: f64,
    /// WBC (cells/mm3) from which markers are moderately elevated (inclusive)
    pub wbc_elevated: f64,
}

impl Default for MarkerThresholds {
    fn default() -> Self {
        Self {
            crp_critical: 100.0,
            crp_elevated: 50.0,
            wbc_critical: 15000.0,
            wbc_elevated: 11000.0,
        }
    }
}

impl MarkerThresholds {
    #[must_use]
    pub fn crp_is_critical(&self, crp: f64) -> bool {
        crp > self.crp_critical
    }

    #[must_use]
    pub fn crp_is_elevated(&self, crp: f64) -> bool {
        (self.crp_elevated..=self.crp_critical).contains(&crp)
    }

    #[must_use]
    pub fn wbc_is_critical(&self, wbc: f64) -> bool {
        wbc > self.wbc_critical
    }

    #[must_use]
    pub fn wbc_is_elevated(&self, wbc: f64) -> bool {
        (self.wbc_elevated..=self.wbc_critical).contains(&wbc)
    }
}
