//! Fixtures shared by the end-to-end tests.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tempfile::TempDir;

/// A realistic `go test -json` excerpt: run/output/pass events, package
/// totals, a failing test and interleaved non-JSON build output.
pub const SAMPLE_LOG: &str = r#"{"Time":"2024-05-01T10:00:00Z","Action":"start","Package":"github.com/cnoe-io/idpbuilder/pkg/controllers/localbuild"}
{"Action":"run","Package":"github.com/cnoe-io/idpbuilder/pkg/controllers/localbuild","Test":"TestGiteaTimeout"}
{"Action":"output","Package":"github.com/cnoe-io/idpbuilder/pkg/controllers/localbuild","Test":"TestGiteaTimeout","Output":"=== RUN   TestGiteaTimeout\n"}
{"Action":"pass","Package":"github.com/cnoe-io/idpbuilder/pkg/controllers/localbuild","Test":"TestGiteaTimeout","Elapsed":35.02}
{"Action":"pass","Package":"github.com/cnoe-io/idpbuilder/pkg/controllers/localbuild","Test":"TestReconcileLocalbuild","Elapsed":4.1}
{"Action":"pass","Package":"github.com/cnoe-io/idpbuilder/pkg/controllers/localbuild","Elapsed":40.5}
# github.com/cnoe-io/idpbuilder/pkg/util [build output]
{"Action":"pass","Package":"github.com/cnoe-io/idpbuilder/pkg/util","Test":"TestCloneRemoteRepoToDir","Elapsed":3.2}
{"Action":"pass","Package":"github.com/cnoe-io/idpbuilder/pkg/util","Test":"TestCopyTreeToTree","Elapsed":0.4}
{"Action":"fail","Package":"github.com/cnoe-io/idpbuilder/pkg/util","Test":"TestFlaky","Elapsed":1.0}
{"Action":"pass","Package":"github.com/cnoe-io/idpbuilder/pkg/k8s","Test":"TestBuildCustomizedManifests","Elapsed":1.75}
{"Action":"pass","Package":"github.com/cnoe-io/idpbuilder/pkg/k8s","Test":"TestEnsureNamespace","Elapsed":0.05}
{"Action":"pass","Package":"github.com/cnoe-io/idpbuilder/pkg/cmd","Test":"TestParsePackageStrings","Elapsed":0.02}
{"Action":"pass","Package":"github.com/cnoe-io/idpbuilder/pkg/cmd","Test":"TestValidateFlags","Elapsed":0.01}
ok  	github.com/cnoe-io/idpbuilder/pkg/cmd	0.031s
"#;

/// Writes `contents` to `rel` under `root`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, contents: &str) -> anyhow::Result<PathBuf> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Temporary directory holding `tests.json` with `contents`.
pub fn log_fixture(contents: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = write_file(dir.path(), "tests.json", contents)?;
    Ok((dir, path))
}

/// Temporary repository with the given docs pages and navigation HTML.
/// `pages` are paths relative to `docs/`, e.g. `specs/foo.md`.
pub fn docs_repo(pages: &[&str], nav_html: Option<&str>) -> anyhow::Result<TempDir> {
    let dir = tempfile::tempdir()?;
    for page in pages {
        write_file(dir.path(), &format!("docs/{page}"), "# Page\n")?;
    }
    if let Some(html) = nav_html {
        write_file(dir.path(), "site/docs/index.html", html)?;
    }
    Ok(dir)
}

/// Navigation HTML linking each of `pages` (relative to `docs/`, `.md`
/// names) the way the site generator does.
pub fn nav_html(pages: &[&str]) -> String {
    let mut html = String::from("<nav>\n");
    for page in pages {
        let href = page.strip_suffix(".md").unwrap_or(page);
        html.push_str(&format!("  <a href=\"/docs/{href}.html\">{href}</a>\n"));
    }
    html.push_str("</nav>\n");
    html
}
