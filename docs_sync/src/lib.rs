//! `docs_sync`
//!
//! Keeps the documentation site's navigation in step with the Markdown
//! sources: every page under `docs/{specs,implementation,user}` must be
//! linked from `site/docs/index.html`.

pub mod validator;

pub use validator::{run_check, validate, SyncReport};
