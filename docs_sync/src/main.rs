//! Documentation sync validator binary.
//!
//! Usage:
//!   cargo run -p docs_sync -- [--root <repo>]
//!
//! Checks that every Markdown file in docs/specs, docs/implementation and
//! docs/user is linked from site/docs/index.html. The repository root
//! defaults to the workspace the tool was built from; `--root` overrides it.
//!
//! Exit codes:
//!   0 - all documentation files are linked
//!   1 - missing links, or the navigation file is absent

use std::env;
use std::process::ExitCode;

use devtools_shared::config::DocsSyncConfig;
use docs_sync::validator::run_check;
use tracing::info;

fn parse_args() -> DocsSyncConfig {
    DocsSyncConfig::from_args(env::args().skip(1))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = parse_args();
    info!(root = %cfg.root.display(), "Validating documentation navigation");

    match run_check(&cfg.root, &mut std::io::stdout().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
