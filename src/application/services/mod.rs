pub mod aggregator;
pub mod analysis;
pub mod insight;
