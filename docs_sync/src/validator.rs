//! Documentation navigation sync check.
//!
//! Compares the Markdown pages under `docs/{specs,implementation,user}` with
//! the links in the generated `site/docs/index.html` sidebar. Links are found
//! with a regex, not an HTML parser: the pattern expects
//! `<a href="/docs/<category>/<file>.html">Title</a>` exactly, so escaped
//! quotes, extra attributes or nested markup inside the anchor are missed.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{bail, Context};
use regex::Regex;
use tracing::{debug, warn};

/// Documentation categories, in report order.
pub const CATEGORIES: [&str; 3] = ["specs", "implementation", "user"];

const BANNER_WIDTH: usize = 70;

/// Navigation page, relative to the repository root.
pub const NAV_FILE: &str = "site/docs/index.html";

const NAV_LINK_PATTERN: &str =
    r#"<a href="/docs/(specs|implementation|user)/([^"]+)">([^<]+)</a>"#;

/// Linked Markdown filenames per category.
pub type NavLinks = BTreeMap<String, BTreeSet<String>>;

/// Navigation link pattern, compiled on first use.
fn nav_link_regex() -> anyhow::Result<&'static Regex> {
    static NAV_LINK: OnceLock<Regex> = OnceLock::new();
    if let Some(re) = NAV_LINK.get() {
        return Ok(re);
    }
    let re = Regex::new(NAV_LINK_PATTERN).context("compile navigation link pattern")?;
    Ok(NAV_LINK.get_or_init(|| re))
}

/// Markdown files in `docs/<category>/`, excluding `README.md`. Symlinks are
/// followed, so a linked page counts as a file. A missing directory has no
/// files.
pub fn markdown_files(root: &Path, category: &str) -> anyhow::Result<BTreeSet<String>> {
    let dir = root.join("docs").join(category);
    if !dir.exists() {
        warn!(dir = %dir.display(), "Documentation directory not found");
        return Ok(BTreeSet::new());
    }

    let mut files = BTreeSet::new();
    for entry in fs::read_dir(&dir).with_context(|| format!("list {}", dir.display()))? {
        let entry = entry?;
        // `DirEntry::file_type` does not follow symlinks; `Path::is_file` does.
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".md") && name != "README.md" {
            files.insert(name);
        }
    }
    Ok(files)
}

/// Extracts linked pages from navigation HTML, mapped back to `.md` names.
/// Every category is present in the result, possibly empty.
pub fn extract_nav_links(html: &str) -> anyhow::Result<NavLinks> {
    let mut links: NavLinks = CATEGORIES
        .iter()
        .map(|c| (c.to_string(), BTreeSet::new()))
        .collect();

    for caps in nav_link_regex()?.captures_iter(html) {
        let (category, target) = (&caps[1], &caps[2]);
        if let Some(stem) = target.strip_suffix(".html") {
            links
                .entry(category.to_string())
                .or_default()
                .insert(format!("{stem}.md"));
        }
    }
    Ok(links)
}

/// Sync status of one documentation category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub category: String,
    /// Number of Markdown files found on disk.
    pub file_count: usize,
    /// Files with no navigation link, sorted.
    pub missing: Vec<String>,
}

/// Result of validating every category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub categories: Vec<CategoryReport>,
}

impl SyncReport {
    pub fn is_synced(&self) -> bool {
        self.categories.iter().all(|c| c.missing.is_empty())
    }

    /// Human-readable status lines, one block per category.
    pub fn messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        for report in &self.categories {
            let label = report.category.to_uppercase();
            if report.missing.is_empty() {
                messages.push(format!(
                    "✅ {label}: All {} file(s) are linked",
                    report.file_count
                ));
            } else {
                messages.push(format!(
                    "\n❌ {label}: Found {} file(s) not linked in navigation:",
                    report.missing.len()
                ));
                messages.extend(report.missing.iter().map(|f| format!("   - {f}")));
            }
        }
        messages
    }
}

/// Path of the navigation page under `root`.
pub fn nav_path(root: &Path) -> PathBuf {
    root.join(NAV_FILE)
}

/// Checks every category under `root` against the navigation page.
pub fn validate(root: &Path) -> anyhow::Result<SyncReport> {
    let nav = nav_path(root);
    if !nav.exists() {
        bail!("Navigation file not found: {}", nav.display());
    }
    let html = fs::read_to_string(&nav).with_context(|| format!("read {}", nav.display()))?;
    let linked = extract_nav_links(&html)?;

    let mut categories = Vec::with_capacity(CATEGORIES.len());
    for category in CATEGORIES {
        let files = markdown_files(root, category)?;
        let missing: Vec<String> = match linked.get(category) {
            Some(links) => files.difference(links).cloned().collect(),
            None => files.iter().cloned().collect(),
        };
        debug!(category, files = files.len(), missing = missing.len(), "Checked category");
        categories.push(CategoryReport {
            category: category.to_string(),
            file_count: files.len(),
            missing,
        });
    }
    Ok(SyncReport { categories })
}

/// Validates `root` and writes the human-readable status report to `out`.
/// Returns whether every page is linked.
pub fn run_check<W: Write>(root: &Path, out: &mut W) -> anyhow::Result<bool> {
    let banner = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{banner}")?;
    writeln!(out, "Documentation Sync Validation")?;
    writeln!(out, "{banner}")?;
    writeln!(out, "Repository: {}", root.display())?;
    writeln!(out, "Checking: docs/specs, docs/implementation, docs/user")?;
    writeln!(out, "Against: {NAV_FILE}")?;
    writeln!(out, "{banner}")?;
    out.flush()?;

    let report = validate(root)?;
    for message in report.messages() {
        writeln!(out, "{message}")?;
    }
    writeln!(out, "{banner}")?;

    if report.is_synced() {
        writeln!(out, "✅ SUCCESS: All documentation files are linked in navigation!")?;
    } else {
        writeln!(out, "❌ FAILURE: Some documentation files are missing from navigation!")?;
        writeln!(out, "\nTo fix this:")?;
        writeln!(out, "1. Edit {NAV_FILE}")?;
        writeln!(out, "2. Add missing files to the appropriate <details> section")?;
        writeln!(
            out,
            "3. Use the pattern: <a href=\"/docs/CATEGORY/filename.html\">Title</a>"
        )?;
    }
    Ok(report.is_synced())
}
