pub mod explainer;
pub mod store;

pub use explainer::{ExplanationError, ExplanationRequest, ExplanationService};
pub use store::{AlertStore, RecordStore, RecordWriter, StoreError};
