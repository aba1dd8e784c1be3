//! End-to-end tests for the documentation navigation validator.

use devtools_tests::{docs_repo, nav_html};
use docs_sync::{run_check, validate};

fn check(root: &std::path::Path) -> anyhow::Result<(bool, String)> {
    let mut out = Vec::new();
    let synced = run_check(root, &mut out)?;
    Ok((synced, String::from_utf8(out)?))
}

#[test]
fn unlinked_spec_is_reported() -> anyhow::Result<()> {
    let repo = docs_repo(
        &["specs/foo.md", "user/getting-started.md"],
        Some(&nav_html(&["user/getting-started.md"])),
    )?;

    let (synced, out) = check(repo.path())?;
    assert!(!synced);
    assert!(out.contains("❌ SPECS: Found 1 file(s) not linked in navigation:\n   - foo.md\n"));
    assert!(out.contains("✅ USER: All 1 file(s) are linked"));
    assert!(out.contains("❌ FAILURE: Some documentation files are missing from navigation!"));
    assert!(out.contains("To fix this:"));
    Ok(())
}

#[test]
fn fully_linked_docs_pass() -> anyhow::Result<()> {
    let pages = [
        "specs/api.md",
        "specs/cli.md",
        "implementation/design.md",
        "user/install.md",
    ];
    let repo = docs_repo(&pages, Some(&nav_html(&pages)))?;
    // READMEs never need a link.
    devtools_tests::write_file(repo.path(), "docs/specs/README.md", "# Specs\n")?;

    let (synced, out) = check(repo.path())?;
    assert!(synced);
    assert!(out.contains("✅ SPECS: All 2 file(s) are linked"));
    assert!(out.contains("✅ IMPLEMENTATION: All 1 file(s) are linked"));
    assert!(out.contains("✅ SUCCESS: All documentation files are linked in navigation!"));
    Ok(())
}

#[test]
fn links_in_wrong_category_do_not_count() -> anyhow::Result<()> {
    let repo = docs_repo(&["user/faq.md"], Some(&nav_html(&["specs/faq.md"])))?;
    let report = validate(repo.path())?;
    assert!(!report.is_synced());
    assert_eq!(report.categories[2].category, "user");
    assert_eq!(report.categories[2].missing, vec!["faq.md".to_string()]);
    Ok(())
}

#[test]
fn missing_navigation_file_fails() -> anyhow::Result<()> {
    let repo = docs_repo(&["specs/foo.md"], None)?;
    let err = check(repo.path()).unwrap_err();
    assert!(err.to_string().contains("Navigation file not found"));
    Ok(())
}
