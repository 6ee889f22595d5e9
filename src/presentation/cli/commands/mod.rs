pub mod add;
pub mod alerts;
pub mod analyze;
pub mod records;
