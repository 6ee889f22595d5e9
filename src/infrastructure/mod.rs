pub mod ai;
pub mod persistence;
