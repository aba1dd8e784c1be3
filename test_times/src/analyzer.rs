//! Analyzer pipeline.
//!
//! Load → categorize/aggregate → render, then emit the reports the way the
//! command line asked for:
//! - text report always goes to the writer (stdout in the binary);
//! - Markdown goes to `markdown_output` if set, otherwise after a banner on
//!   the same writer;
//! - aggregated stats optionally go to `json_output`.
//!
//! Rendering is a pure function of the input bytes, so repeated runs over the
//! same log produce identical output.

use std::io::Write;

use anyhow::Context;
use devtools_shared::{
    analysis::{analyze, AnalysisResult},
    config::AnalyzerConfig,
    fs::write_atomic,
    markdown_report::render_markdown,
    test_log::TestLog,
    text_report::render_text,
};
use tracing::info;

const BANNER_WIDTH: usize = 80;

/// Rendered output of one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct Reports {
    pub stats: AnalysisResult,
    pub text: String,
    pub markdown: String,
}

impl Reports {
    /// Aggregates and renders an already loaded log.
    pub fn from_log(log: &TestLog) -> Self {
        let stats = analyze(log);
        let text = render_text(&stats);
        let markdown = render_markdown(&stats);
        Self {
            stats,
            text,
            markdown,
        }
    }
}

/// Test-time analyzer bound to one invocation's config.
pub struct Analyzer {
    pub cfg: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(cfg: AnalyzerConfig) -> Self {
        Self { cfg }
    }

    /// Loads the input log and renders both reports.
    pub fn build_reports(&self) -> anyhow::Result<Reports> {
        let log = TestLog::load(&self.cfg.input)?;
        info!(
            input = %self.cfg.input.display(),
            tests = log.tests.len(),
            packages = log.packages.len(),
            skipped = log.skipped_lines,
            "Loaded test log"
        );
        Ok(Reports::from_log(&log))
    }

    /// Runs the whole pipeline, writing console output to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> anyhow::Result<Reports> {
        let reports = self.build_reports()?;
        self.emit(&reports, out)?;
        Ok(reports)
    }

    /// Writes already rendered reports to `out` and any configured files.
    pub fn emit<W: Write>(&self, reports: &Reports, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "{}", reports.text)?;

        match &self.cfg.markdown_output {
            Some(path) => {
                write_atomic(path, reports.markdown.as_bytes())
                    .context("save Markdown report")?;
                writeln!(out, "\nMarkdown report saved to: {}", path.display())?;
            }
            None => {
                let banner = "=".repeat(BANNER_WIDTH);
                writeln!(out, "\n{banner}")?;
                writeln!(out, "MARKDOWN REPORT")?;
                writeln!(out, "{banner}")?;
                writeln!(out, "{}", reports.markdown)?;
            }
        }

        if let Some(path) = &self.cfg.json_output {
            let json = serde_json::to_string_pretty(&reports.stats)
                .context("serialize statistics")?;
            write_atomic(path, json.as_bytes()).context("save JSON statistics")?;
            writeln!(out, "JSON statistics saved to: {}", path.display())?;
        }

        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    const LOG: &str = concat!(
        r#"{"Action":"pass","Package":"pkg/a","Test":"TestReconcileFoo","Elapsed":5.0}"#, "\n",
        r#"{"Action":"pass","Package":"pkg/b","Test":"TestCloneRepo","Elapsed":2.5}"#, "\n",
    );

    fn config(dir: &tempfile::TempDir, markdown: Option<&str>) -> AnalyzerConfig {
        let input = dir.path().join("tests.json");
        fs::write(&input, LOG).unwrap();
        AnalyzerConfig {
            input,
            markdown_output: markdown.map(|m| dir.path().join(m)),
            json_output: None,
        }
    }

    #[test]
    fn markdown_to_stdout_after_banner() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = Analyzer::new(config(&dir, None));
        let mut out = Vec::new();
        let reports = analyzer.run(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        let banner = "=".repeat(BANNER_WIDTH);
        let expected = format!(
            "{}\n\n{banner}\nMARKDOWN REPORT\n{banner}\n{}\n",
            reports.text, reports.markdown
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn markdown_to_file_with_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(&dir, Some("report.md"));
        let md_path = cfg.markdown_output.clone().unwrap();
        let mut out = Vec::new();
        let reports = Analyzer::new(cfg).run(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(fs::read_to_string(&md_path).unwrap(), reports.markdown);
        assert!(out.starts_with(&reports.text));
        assert!(out.ends_with(&format!(
            "\nMarkdown report saved to: {}\n",
            md_path.display()
        )));
        assert!(!out.contains("MARKDOWN REPORT"));
    }

    #[test]
    fn missing_input_is_an_error() {
        let analyzer = Analyzer::new(AnalyzerConfig {
            input: PathBuf::from("/nonexistent/tests.json"),
            markdown_output: None,
            json_output: None,
        });
        let err = analyzer.run(&mut Vec::<u8>::new()).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/tests.json"));
    }

    #[test]
    fn json_statistics_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(&dir, Some("report.md"));
        let json_path = dir.path().join("stats.json");
        cfg.json_output = Some(json_path.clone());

        let reports = Analyzer::new(cfg).run(&mut Vec::<u8>::new()).unwrap();
        let decoded: AnalysisResult =
            serde_json::from_str(&fs::read_to_string(json_path).unwrap()).unwrap();
        assert_eq!(decoded, reports.stats);
    }
}
