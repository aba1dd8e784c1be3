//! Test execution time analyzer.
//!
//! Usage:
//!   cargo run -p test_times -- <test-output.json> [output.md] [--json <stats.json>]
//!
//! Generate the input with `go test -json ./... > test-output.json`. The text
//! report always goes to stdout; the Markdown report goes to `output.md` when
//! given, otherwise to stdout after the text report.
//!
//! Set `RUST_LOG=debug` to see loader diagnostics on stderr.

use std::env;
use std::process::ExitCode;

use devtools_shared::config::{AnalyzerConfig, ANALYZE_USAGE};
use test_times::Analyzer;
use tracing::info;

fn parse_args() -> Option<AnalyzerConfig> {
    AnalyzerConfig::from_args(env::args().skip(1))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(cfg) = parse_args() else {
        eprintln!("{ANALYZE_USAGE}");
        return ExitCode::FAILURE;
    };
    info!(input = %cfg.input.display(), "Starting analysis");

    let analyzer = Analyzer::new(cfg);
    let stdout = std::io::stdout();
    match analyzer.run(&mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
