//! Fixed-width console report with block-character bar charts.

use crate::analysis::{short_package_name, AnalysisResult};

const WIDTH: usize = 80;
const BAR_WIDTH: usize = 50;
const TOP_PACKAGES: usize = 15;
const BAR_CHAR: &str = "█";

const SLOW_TEST_REASONS: [&str; 4] = [
    "  1. I/O Operations: Tests that clone repositories, read/write files",
    "  2. Integration Tests: Tests that set up controllers and reconcile resources",
    "  3. Network Operations: Tests that interact with Gitea or other services",
    "  4. Manifest Building: Tests that generate or process Kubernetes manifests",
];

/// Renders the plain-text report.
pub fn render_text(stats: &AnalysisResult) -> String {
    let mut out = Vec::new();
    let heavy = "=".repeat(WIDTH);

    out.push(heavy.clone());
    out.push("TEST EXECUTION TIME ANALYSIS".to_string());
    out.push(heavy.clone());
    out.push(String::new());

    out.push(format!("Total Tests: {}", stats.total_test_count));
    out.push(format!("Total Time: {:.2}s", stats.total_elapsed_time));
    out.push(String::new());

    section(&mut out, "SLOWEST INDIVIDUAL TESTS");
    for (rank, test) in stats.slowest_tests.iter().enumerate() {
        out.push(format!(
            "{:2}. {:<50} {:>6.2}s  ({})",
            rank + 1,
            test.test_name,
            test.elapsed_seconds,
            short_package_name(&test.package)
        ));
    }
    out.push(String::new());

    section(&mut out, "TEST TIMES BY CATEGORY");
    for (category, data) in stats.categories_by_time() {
        out.push(format!(
            "{:20} {:>7.2}s  {}",
            category,
            data.total_elapsed,
            bar(stats.bar_len(data.total_elapsed, BAR_WIDTH))
        ));
        out.push(format!(
            "{:20} ({} tests, avg: {:.3}s)",
            "", data.count, data.average_elapsed
        ));
    }
    out.push(String::new());

    section(&mut out, "TEST TIMES BY PACKAGE");
    for (package, data) in stats.packages_by_time().into_iter().take(TOP_PACKAGES) {
        out.push(format!(
            "{:30} {:>7.2}s  {}",
            short_package_name(package),
            data.total_elapsed,
            bar(stats.bar_len(data.total_elapsed, BAR_WIDTH))
        ));
    }
    out.push(String::new());

    section(&mut out, "WHY DO TESTS TAKE LONG?");
    out.push(String::new());

    if let Some((category, data)) = stats.slowest_category() {
        out.push(format!("Slowest Category: {category}"));
        out.push(format!("  - Takes {:.2}s total", data.total_elapsed));
        out.push(format!("  - Contains {} tests", data.count));
        out.push(format!("  - Average time per test: {:.3}s", data.average_elapsed));
        out.push(String::new());
    }

    if let Some((package, data)) = stats.slowest_package() {
        out.push(format!("Slowest Package: {}", short_package_name(package)));
        out.push(format!("  - Takes {:.2}s total", data.total_elapsed));
        out.push(format!("  - Contains {} tests", data.count));
        out.push(String::new());
    }

    if let Some(test) = stats.slowest_test() {
        out.push(format!("Slowest Single Test: {}", test.test_name));
        out.push(format!("  - Takes {:.2}s", test.elapsed_seconds));
        out.push(format!("  - Package: {}", short_package_name(&test.package)));
    }

    out.push(String::new());
    out.push("Common reasons for slow tests:".to_string());
    out.extend(SLOW_TEST_REASONS.iter().map(|s| s.to_string()));
    out.push(String::new());
    out.push(heavy);

    out.join("\n")
}

fn section(out: &mut Vec<String>, title: &str) {
    let light = "-".repeat(WIDTH);
    out.push(light.clone());
    out.push(title.to_string());
    out.push(light);
}

/// A run of `len` block characters.
pub(crate) fn bar(len: usize) -> String {
    BAR_CHAR.repeat(len)
}
