pub mod alert;
pub mod clinical_note;
pub mod imaging_report;
pub mod lab_result;
pub mod patient_records;

pub use alert::Alert;
pub use clinical_note::ClinicalNote;
pub use imaging_report::ImagingReport;
pub use lab_result::LabResult;
pub use patient_records::PatientRecords;
