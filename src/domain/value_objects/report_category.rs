use serde::{Deserialize, Serialize};

/// Imaging modality a report was filed under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReportCategory {
    Radiology,
    Ct,
    Mri,
    Xray,
    Echo,
    Unrecognized,
}

impl ReportCategory {
    /// Parses a free-text category. Never fails: unknown labels map to
    /// `Unrecognized`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "radiology" => Self::Radiology,
            "ct" => Self::Ct,
            "mri" => Self::Mri,
            "xray" | "x-ray" | "x_ray" => Self::Xray,
            "echo" => Self::Echo,
            _ => Self::Unrecognized,
        }
    }

    /// Categories whose text feeds the imaging blob.
    #[must_use]
    pub const fn is_imaging(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Radiology => "radiology",
            Self::Ct => "ct",
            Self::Mri => "mri",
            Self::Xray => "xray",
            Self::Echo => "echo",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
