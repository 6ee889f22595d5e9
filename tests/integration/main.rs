#![allow(clippy::expect_used)]

mod analysis_test;
mod persistence_test;
mod rules_test;
mod support;
