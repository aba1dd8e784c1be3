//! `test_times`
//!
//! Test execution time analyzer:
//! - Reads `go test -json` event logs
//! - Buckets tests into categories and packages
//! - Prints a fixed-width text report
//! - Writes or prints a Markdown report

pub mod analyzer;

pub use analyzer::{Analyzer, Reports};
