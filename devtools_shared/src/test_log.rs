//! Loader for `go test -json` style event logs.
//!
//! Each line is an independent JSON object. Only `"pass"` events carry timing
//! we care about: those with a `Test` field are individual tests, those
//! without one are package totals. Lines that are not JSON objects, or not
//! even UTF-8, are skipped, since CI logs interleave plain build output with
//! events.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Timing of a single passed test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    pub package: String,
    pub test_name: String,
    pub elapsed_seconds: f64,
}

/// Package-level elapsed times, keyed by package path.
pub type PackageTotals = BTreeMap<String, f64>;

/// One decoded log line. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct TestEvent {
    #[serde(rename = "Action", default)]
    action: Option<String>,
    #[serde(rename = "Package", default)]
    package: Option<String>,
    #[serde(rename = "Test", default)]
    test: Option<String>,
    #[serde(rename = "Elapsed", default)]
    elapsed: Option<f64>,
}

/// Everything extracted from a log file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestLog {
    /// Passed tests in input order.
    pub tests: Vec<TestRecord>,
    /// Package totals; a later event for the same package overwrites.
    pub packages: PackageTotals,
    /// Lines that failed to decode as a JSON object.
    pub skipped_lines: usize,
}

impl TestLog {
    /// Reads and parses the log at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file =
            File::open(path).with_context(|| format!("open test log {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("read test log {}", path.display()))
    }

    /// Parses a log from any buffered reader. Only I/O errors fail; bad
    /// lines are counted in `skipped_lines`.
    pub fn from_reader<R: BufRead>(reader: R) -> anyhow::Result<Self> {
        let mut log = TestLog::default();
        for line in reader.split(b'\n') {
            let line = line?;
            let line = line.strip_suffix(b"\r").unwrap_or(&line);
            log.ingest_line(line);
        }
        debug!(
            tests = log.tests.len(),
            packages = log.packages.len(),
            skipped = log.skipped_lines,
            "Loaded test log"
        );
        Ok(log)
    }

    /// Parses a log held in memory.
    pub fn parse_str(s: &str) -> Self {
        let mut log = TestLog::default();
        for line in s.lines() {
            log.ingest_line(line.as_bytes());
        }
        log
    }

    fn ingest_line(&mut self, line: &[u8]) {
        let event: TestEvent = match serde_json::from_slice(line) {
            Ok(event) => event,
            Err(_) => {
                self.skipped_lines += 1;
                return;
            }
        };

        if event.action.as_deref() != Some("pass") {
            return;
        }
        let Some(elapsed) = event.elapsed else {
            return;
        };
        let package = event.package.unwrap_or_default();
        match event.test {
            Some(test_name) => self.tests.push(TestRecord {
                package,
                test_name,
                elapsed_seconds: elapsed,
            }),
            None => {
                self.packages.insert(package, elapsed);
            }
        }
    }
}
