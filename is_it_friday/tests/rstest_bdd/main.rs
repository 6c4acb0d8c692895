//! `rstest-bdd` suite for the `is_it_friday` crate.
//!
//! [`fixtures`] provides the per-scenario state, [`steps`] binds the step
//! phrases to the classifier, and [`scenarios`] attaches the feature files so
//! the suite runs under the stock `cargo test` harness.

mod fixtures;
mod scenarios;
mod steps;
