//! Command-line configuration.
//!
//! Both tools are configured purely from argv; these structs are what the
//! binaries' `parse_args` produce.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Usage line printed by `analyze` when no input path is given.
pub const ANALYZE_USAGE: &str = "Usage: analyze <test-output.json> [output.md] [--json <stats.json>]";

/// Configuration for the test-time analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Newline-delimited JSON test event log.
    pub input: PathBuf,
    /// Where to write the Markdown report. When absent it goes to stdout.
    #[serde(default)]
    pub markdown_output: Option<PathBuf>,
    /// Optional path for the aggregated statistics as JSON.
    #[serde(default)]
    pub json_output: Option<PathBuf>,
}

impl AnalyzerConfig {
    /// Builds a config from arguments (program name already stripped).
    ///
    /// Returns `None` when no input path is present.
    pub fn from_args<I, S>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut positional = Vec::new();
        let mut json_output = None;
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--json" if i + 1 < args.len() => {
                    json_output = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                }
                other => {
                    positional.push(other.to_string());
                    i += 1;
                }
            }
        }

        let mut positional = positional.into_iter();
        let input = PathBuf::from(positional.next()?);
        Some(Self {
            input,
            markdown_output: positional.next().map(PathBuf::from),
            json_output,
        })
    }
}

/// Configuration for the documentation-sync validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsSyncConfig {
    /// Repository root containing `docs/` and `site/`.
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

/// The workspace this tool was built from: one level above the crate
/// directory, so the check does not depend on the caller's working directory.
pub fn default_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Default for DocsSyncConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

impl DocsSyncConfig {
    /// Builds a config from arguments (program name already stripped).
    /// Unknown arguments are ignored.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cfg = Self::default();
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--root" if i + 1 < args.len() => {
                    cfg.root = PathBuf::from(&args[i + 1]);
                    i += 2;
                }
                _ => i += 1,
            }
        }
        cfg
    }
}
