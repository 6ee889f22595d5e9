pub mod report_category;
pub mod severity;
pub mod thresholds;

pub use report_category::ReportCategory;
pub use severity::Severity;
pub use thresholds::MarkerThresholds;
