//! Heuristic test categorization.
//!
//! Categories are inferred from naming conventions with an ordered rule list;
//! the first matching rule wins, so `TestReconcileConfigParsing` is an
//! integration test even though it also mentions `config` and `parse`.
//! Matching is case-insensitive substring matching, not word matching.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Test category, in rule-precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Integration,
    #[serde(rename = "I/O")]
    Io,
    #[serde(rename = "Build/Manifest")]
    BuildManifest,
    #[serde(rename = "Config/Validation")]
    ConfigValidation,
    Unit,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Integration,
        Category::Io,
        Category::BuildManifest,
        Category::ConfigValidation,
        Category::Unit,
    ];

    /// Report label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Integration => "Integration",
            Category::Io => "I/O",
            Category::BuildManifest => "Build/Manifest",
            Category::ConfigValidation => "Config/Validation",
            Category::Unit => "Unit",
        }
    }

    /// Inverse of [`Category::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width specifiers like `{:20}` apply.
        f.pad(self.label())
    }
}

/// One categorization rule: matches if any test keyword occurs in the
/// lowercased test name or any package keyword in the lowercased package.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    pub test_keywords: &'static [&'static str],
    pub package_keywords: &'static [&'static str],
}

impl CategoryRule {
    fn matches(&self, test_lower: &str, package_lower: &str) -> bool {
        self.test_keywords.iter().any(|k| test_lower.contains(k))
            || self.package_keywords.iter().any(|k| package_lower.contains(k))
    }
}

/// Rules in evaluation order. Anything left over is [`Category::Unit`].
pub const RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Integration,
        test_keywords: &["reconcile"],
        package_keywords: &["controller"],
    },
    CategoryRule {
        category: Category::Io,
        test_keywords: &["clone", "copy", "worktree", "gitea", "github", "repo"],
        package_keywords: &[],
    },
    CategoryRule {
        category: Category::BuildManifest,
        test_keywords: &["build", "manifest", "k8s", "install"],
        package_keywords: &[],
    },
    CategoryRule {
        category: Category::ConfigValidation,
        test_keywords: &["config", "validate", "parse"],
        package_keywords: &[],
    },
];

/// Assigns a test to exactly one category.
pub fn categorize(test_name: &str, package_name: &str) -> Category {
    let test_lower = test_name.to_lowercase();
    let package_lower = package_name.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&test_lower, &package_lower))
        .map(|rule| rule.category)
        .unwrap_or(Category::Unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconcile_and_controller_are_integration() {
        assert_eq!(categorize("TestReconcileFoo", "pkg/a"), Category::Integration);
        assert_eq!(categorize("TestHelper", "pkg/controllers/localbuild"), Category::Integration);
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(categorize("TestReconcileConfigParsing", "pkg/util"), Category::Integration);
        assert_eq!(categorize("TestCloneAndBuild", "pkg/util"), Category::Io);
        assert_eq!(categorize("TestBuildConfig", "pkg/util"), Category::BuildManifest);
    }

    #[test]
    fn keyword_buckets() {
        assert_eq!(categorize("TestCloneRepo", "pkg/b"), Category::Io);
        assert_eq!(categorize("TestGiteaAPI", "pkg/b"), Category::Io);
        assert_eq!(categorize("TestK8sApply", "pkg/b"), Category::BuildManifest);
        assert_eq!(categorize("TestValidateSpec", "pkg/b"), Category::ConfigValidation);
        assert_eq!(categorize("TestAdd", "pkg/b"), Category::Unit);
    }

    #[test]
    fn substring_not_word_matching() {
        assert_eq!(categorize("TestReconfigure", "pkg/b"), Category::ConfigValidation);
        assert_eq!(categorize("TestRepository", "pkg/b"), Category::Io);
        assert_eq!(categorize("TestUnreconciled", "pkg/b"), Category::Integration);
    }

    #[test]
    fn package_keywords_only_apply_to_integration() {
        assert_eq!(categorize("TestAdd", "pkg/repo"), Category::Unit);
        assert_eq!(categorize("TestAdd", "pkg/build"), Category::Unit);
    }

    #[test]
    fn deterministic_and_total() {
        let names = ["", "x", "TestReconcile", "TestParse", "TestManifest", "TestCopy"];
        for name in names {
            let first = categorize(name, "pkg");
            assert!(Category::ALL.contains(&first));
            assert_eq!(first, categorize(name, "pkg"));
        }
    }

    #[test]
    fn labels_round_trip() {
        for c in Category::ALL {
            assert_eq!(Category::from_label(c.label()), Some(c));
        }
        assert_eq!(format!("{:<6}|", Category::Io), "I/O   |");
    }
}
