pub mod alert_fmt;
pub mod record_fmt;
