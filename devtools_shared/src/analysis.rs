//! Timing aggregation.
//!
//! Turns a [`TestLog`] into per-category and per-package statistics plus the
//! slowest individual tests. Both reporters render from [`AnalysisResult`].

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::{categorize, Category};
use crate::test_log::{TestLog, TestRecord};

/// Number of tests kept in [`AnalysisResult::slowest_tests`].
pub const SLOWEST_LIMIT: usize = 10;

/// Count/total/average over a non-empty group of tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    pub count: usize,
    pub total_elapsed: f64,
    pub average_elapsed: f64,
}

impl GroupStats {
    fn new(count: usize, total_elapsed: f64) -> Self {
        let average_elapsed = if count == 0 {
            0.0
        } else {
            total_elapsed / count as f64
        };
        Self {
            count,
            total_elapsed,
            average_elapsed,
        }
    }
}

pub type CategoryStats = GroupStats;
pub type PackageStats = GroupStats;

/// Aggregated view of one test run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total_test_count: usize,
    pub total_elapsed_time: f64,
    pub category_stats: BTreeMap<Category, CategoryStats>,
    pub package_stats: BTreeMap<String, PackageStats>,
    /// Slowest tests first; ties keep input order.
    pub slowest_tests: Vec<TestRecord>,
}

/// Aggregates a loaded log.
pub fn analyze(log: &TestLog) -> AnalysisResult {
    let mut by_category: BTreeMap<Category, (usize, f64)> = BTreeMap::new();
    let mut by_package: BTreeMap<&str, (usize, f64)> = BTreeMap::new();

    for test in &log.tests {
        let category = categorize(&test.test_name, &test.package);
        let entry = by_category.entry(category).or_default();
        entry.0 += 1;
        entry.1 += test.elapsed_seconds;

        let entry = by_package.entry(test.package.as_str()).or_default();
        entry.0 += 1;
        entry.1 += test.elapsed_seconds;
    }

    let category_stats = by_category
        .into_iter()
        .map(|(category, (count, total))| (category, GroupStats::new(count, total)))
        .collect();

    let package_stats = by_package
        .into_iter()
        .map(|(package, (count, summed))| {
            let total = log.packages.get(package).copied().unwrap_or(summed);
            (package.to_string(), GroupStats::new(count, total))
        })
        .collect();

    // `sort_by` is stable, so equal times keep ingestion order.
    let mut slowest_tests = log.tests.clone();
    slowest_tests.sort_by(|a, b| descending(a.elapsed_seconds, b.elapsed_seconds));
    slowest_tests.truncate(SLOWEST_LIMIT);

    let result = AnalysisResult {
        total_test_count: log.tests.len(),
        // Not `sum()`: an empty float sum is -0.0 and renders as "-0.00".
        total_elapsed_time: log.tests.iter().fold(0.0, |acc, t| acc + t.elapsed_seconds),
        category_stats,
        package_stats,
        slowest_tests,
    };
    debug!(
        tests = result.total_test_count,
        categories = result.category_stats.len(),
        packages = result.package_stats.len(),
        "Analyzed test timings"
    );
    result
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

impl AnalysisResult {
    /// Categories by total time, slowest first.
    pub fn categories_by_time(&self) -> Vec<(Category, CategoryStats)> {
        let mut categories: Vec<_> = self
            .category_stats
            .iter()
            .map(|(category, stats)| (*category, *stats))
            .collect();
        categories.sort_by(|a, b| descending(a.1.total_elapsed, b.1.total_elapsed));
        categories
    }

    /// Packages by total time, slowest first.
    pub fn packages_by_time(&self) -> Vec<(&str, PackageStats)> {
        let mut packages: Vec<_> = self
            .package_stats
            .iter()
            .map(|(package, stats)| (package.as_str(), *stats))
            .collect();
        packages.sort_by(|a, b| descending(a.1.total_elapsed, b.1.total_elapsed));
        packages
    }

    pub fn slowest_category(&self) -> Option<(Category, CategoryStats)> {
        self.categories_by_time().into_iter().next()
    }

    pub fn slowest_package(&self) -> Option<(&str, PackageStats)> {
        self.packages_by_time().into_iter().next()
    }

    pub fn slowest_test(&self) -> Option<&TestRecord> {
        self.slowest_tests.first()
    }

    /// `value` as a percentage of the total elapsed time, or 0 when nothing
    /// was timed.
    pub fn share_of_total(&self, value: f64) -> f64 {
        if self.total_elapsed_time > 0.0 {
            value / self.total_elapsed_time * 100.0
        } else {
            0.0
        }
    }

    /// Bar length for `value` on a chart `width` cells wide. The scale never
    /// drops below one second so tiny runs don't blow up.
    pub fn bar_len(&self, value: f64, width: usize) -> usize {
        let scaled = value / self.total_elapsed_time.max(1.0) * width as f64;
        scaled.round().max(0.0) as usize
    }
}

/// Last path segment of a package import path.
pub fn short_package_name(package: &str) -> &str {
    package.rsplit('/').next().unwrap_or(package)
}
