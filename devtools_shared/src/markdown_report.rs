//! Markdown report: tables, a mermaid pie chart and a findings narrative.

use crate::analysis::{short_package_name, AnalysisResult};
use crate::text_report::bar;

const BAR_WIDTH: usize = 40;
const TOP_PACKAGES: usize = 10;

/// Line emitted in place of the findings when there is nothing to analyze.
pub const NO_DATA: &str = "No test data available for analysis.";

const SLOW_TEST_REASONS: [&str; 4] = [
    "1. **I/O Operations**: Tests that clone repositories, read/write files, or interact with the filesystem take longer due to disk I/O.",
    "2. **Integration Tests**: Controller tests that set up Kubernetes environments and reconcile resources require more setup and teardown time.",
    "3. **Network Operations**: Tests that interact with Gitea API or other network services may include retries and timeouts.",
    "4. **Manifest Building**: Tests that generate, parse, or process Kubernetes manifests involve complex YAML/JSON operations.",
];

const RECOMMENDATIONS: [&str; 4] = [
    "1. **Parallelize where possible**: Some tests can run in parallel to reduce overall execution time.",
    "2. **Mock external dependencies**: Replace actual I/O and network operations with mocks for unit tests.",
    "3. **Use test fixtures**: Pre-generate test data to avoid repeated expensive operations.",
    "4. **Split integration tests**: Consider separating integration tests from unit tests for faster feedback loops.",
];

/// Renders the Markdown report.
pub fn render_markdown(stats: &AnalysisResult) -> String {
    let mut out: Vec<String> = Vec::new();
    let categories = stats.categories_by_time();

    out.push("# Test Execution Time Analysis".into());
    out.push(String::new());
    out.push("This report shows the execution times of tests in the project.".into());
    out.push(String::new());

    out.push("## Overview".into());
    out.push(String::new());
    out.push(format!("- **Total Tests**: {}", stats.total_test_count));
    out.push(format!(
        "- **Total Execution Time**: {:.2}s",
        stats.total_elapsed_time
    ));
    out.push(String::new());

    out.push("## Slowest Individual Tests".into());
    out.push(String::new());
    out.push("| Rank | Test Name | Time (s) | Package |".into());
    out.push("|------|-----------|----------|---------|".into());
    for (rank, test) in stats.slowest_tests.iter().enumerate() {
        out.push(format!(
            "| {} | `{}` | {:.2} | {} |",
            rank + 1,
            test.test_name,
            test.elapsed_seconds,
            short_package_name(&test.package)
        ));
    }
    out.push(String::new());

    out.push("## Test Times by Category".into());
    out.push(String::new());
    out.push("Tests are categorized based on their functionality:".into());
    out.push(String::new());
    out.push("| Category | Total Time (s) | Test Count | Avg Time (s) |".into());
    out.push("|----------|----------------|------------|--------------|".into());
    for (category, data) in &categories {
        out.push(format!(
            "| {} | {:.2} | {} | {:.3} |",
            category, data.total_elapsed, data.count, data.average_elapsed
        ));
    }
    out.push(String::new());

    out.push("### Category Distribution (Mermaid Diagram)".into());
    out.push(String::new());
    out.push("```mermaid".into());
    out.push(format!(
        "pie title Test Execution Time by Category (Total: {:.2}s)",
        stats.total_elapsed_time
    ));
    for (category, data) in &categories {
        out.push(format!("    \"{}\" : {:.2}", category, data.total_elapsed));
    }
    out.push("```".into());
    out.push(String::new());

    out.push("### Category Distribution (Text)".into());
    out.push(String::new());
    out.push("```".into());
    for (category, data) in &categories {
        out.push(format!(
            "{:20} {:>7.2}s  {}",
            category,
            data.total_elapsed,
            bar(stats.bar_len(data.total_elapsed, BAR_WIDTH))
        ));
    }
    out.push("```".into());
    out.push(String::new());

    out.push("## Test Times by Package".into());
    out.push(String::new());
    out.push("| Package | Total Time (s) | Test Count |".into());
    out.push("|---------|----------------|------------|".into());
    for (package, data) in stats.packages_by_time().into_iter().take(TOP_PACKAGES) {
        out.push(format!(
            "| {} | {:.2} | {} |",
            short_package_name(package),
            data.total_elapsed,
            data.count
        ));
    }
    out.push(String::new());

    out.push("## Analysis: Why Do Tests Take Long?".into());
    out.push(String::new());
    push_findings(&mut out, stats);

    out.join("\n")
}

fn push_findings(out: &mut Vec<String>, stats: &AnalysisResult) {
    let (Some((category, cat)), Some((package, pkg)), Some(test)) = (
        stats.slowest_category(),
        stats.slowest_package(),
        stats.slowest_test(),
    ) else {
        out.push(NO_DATA.into());
        out.push(String::new());
        return;
    };

    out.push("### Key Findings".into());
    out.push(String::new());
    out.push(format!("1. **Slowest Test Category**: `{category}`"));
    out.push(format!(
        "   - Takes {:.2}s total ({:.1}% of total time)",
        cat.total_elapsed,
        stats.share_of_total(cat.total_elapsed)
    ));
    out.push(format!("   - Contains {} tests", cat.count));
    out.push(format!(
        "   - Average time per test: {:.3}s",
        cat.average_elapsed
    ));
    out.push(String::new());

    out.push(format!(
        "2. **Slowest Package**: `{}`",
        short_package_name(package)
    ));
    out.push(format!(
        "   - Takes {:.2}s total ({:.1}% of total time)",
        pkg.total_elapsed,
        stats.share_of_total(pkg.total_elapsed)
    ));
    out.push(format!("   - Contains {} tests", pkg.count));
    out.push(String::new());

    out.push(format!("3. **Slowest Single Test**: `{}`", test.test_name));
    out.push(format!(
        "   - Takes {:.2}s ({:.1}% of total time)",
        test.elapsed_seconds,
        stats.share_of_total(test.elapsed_seconds)
    ));
    out.push(format!("   - Located in package `{}`", test.package));
    out.push(String::new());

    out.push("### Common Reasons for Slow Tests".into());
    out.push(String::new());
    for reason in SLOW_TEST_REASONS {
        out.push(reason.into());
        out.push(String::new());
    }

    out.push("### Recommendations for Improvement".into());
    out.push(String::new());
    out.extend(RECOMMENDATIONS.iter().map(|s| s.to_string()));
    out.push(String::new());
}
