//! `devtools_shared`
//!
//! Shared libraries used by the developer-tooling binaries.
//!
//! Pipeline for test timing analysis:
//! - `test_log`: load `go test -json` event logs.
//! - `category`: ordered, first-match-wins test categorization.
//! - `analysis`: per-category/per-package aggregation and slowest tests.
//! - `text_report` / `markdown_report`: renderers over the aggregate.
//!
//! Everything is synchronous and single pass. No `unsafe`.

pub mod analysis;
pub mod category;
pub mod config;
pub mod fs;
pub mod markdown_report;
pub mod test_log;
pub mod text_report;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::analysis::*;
    pub use crate::category::*;
    pub use crate::config::*;
    pub use crate::markdown_report::render_markdown;
    pub use crate::test_log::*;
    pub use crate::text_report::render_text;
}
