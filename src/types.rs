use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One of the six fixed issue classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    PerformanceIssues,
    MemoryManagement,
    CodeStyle,
    ModernCpp,
    GameSpecific,
    PotentialBugs,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::PerformanceIssues,
        Category::MemoryManagement,
        Category::CodeStyle,
        Category::ModernCpp,
        Category::GameSpecific,
        Category::PotentialBugs,
    ];

    /// snake_case key used in the serialized findings map
    pub fn key(self) -> &'static str {
        match self {
            Category::PerformanceIssues => "performance_issues",
            Category::MemoryManagement => "memory_management",
            Category::CodeStyle => "code_style",
            Category::ModernCpp => "modern_cpp",
            Category::GameSpecific => "game_specific",
            Category::PotentialBugs => "potential_bugs",
        }
    }

    /// Title-cased heading used in formatted reports
    pub fn display_name(self) -> &'static str {
        match self {
            Category::PerformanceIssues => "Performance Issues",
            Category::MemoryManagement => "Memory Management",
            Category::CodeStyle => "Code Style",
            Category::ModernCpp => "Modern Cpp",
            Category::GameSpecific => "Game Specific",
            Category::PotentialBugs => "Potential Bugs",
        }
    }
}

/// A detected issue with its location and a suggested fix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Line number (1-indexed)
    pub line: u32,
    /// Trimmed source line the issue was found on
    pub code: String,
    /// Short issue label
    pub issue: String,
    /// Suggested improvement
    pub suggestion: String,
}

/// Findings grouped by category.
///
/// All six categories are always present; a category with no findings holds
/// an empty list. Findings within a category are in ascending line order.
/// Serializes to a JSON object keyed by category in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Analysis {
    pub performance_issues: Vec<Finding>,
    pub memory_management: Vec<Finding>,
    pub code_style: Vec<Finding>,
    pub modern_cpp: Vec<Finding>,
    pub game_specific: Vec<Finding>,
    pub potential_bugs: Vec<Finding>,
}

impl Analysis {
    /// Findings recorded for a category
    pub fn findings(&self, category: Category) -> &[Finding] {
        match category {
            Category::PerformanceIssues => &self.performance_issues,
            Category::MemoryManagement => &self.memory_management,
            Category::CodeStyle => &self.code_style,
            Category::ModernCpp => &self.modern_cpp,
            Category::GameSpecific => &self.game_specific,
            Category::PotentialBugs => &self.potential_bugs,
        }
    }

    pub(crate) fn findings_mut(&mut self, category: Category) -> &mut Vec<Finding> {
        match category {
            Category::PerformanceIssues => &mut self.performance_issues,
            Category::MemoryManagement => &mut self.memory_management,
            Category::CodeStyle => &mut self.code_style,
            Category::ModernCpp => &mut self.modern_cpp,
            Category::GameSpecific => &mut self.game_specific,
            Category::PotentialBugs => &mut self.potential_bugs,
        }
    }

    /// Iterate categories with their findings in display order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Finding])> {
        Category::ALL.iter().map(|&c| (c, self.findings(c)))
    }

    /// Total number of findings across all categories
    pub fn total(&self) -> usize {
        self.iter().map(|(_, findings)| findings.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Result of a suggestion-generation request.
///
/// Always displayable: a failed completion request degrades into this shape
/// (original code, error text as explanation, empty diff) instead of an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionResponse {
    /// Improved code extracted from the model response; empty when the
    /// response contained no fenced code block
    pub improved_code: String,
    /// Explanation of the changes, or error detail on failure
    pub explanation: String,
    /// Side-by-side HTML diff of original vs. improved code
    pub diff_html: String,
}

/// Snapshot stored by the host application when the user integrates an
/// improved version into their working code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationRecord {
    pub timestamp: DateTime<Utc>,
    pub original: String,
    pub improved: String,
    pub explanation: String,
}

impl IntegrationRecord {
    /// Create a record stamped with the current time
    pub fn new(
        original: impl Into<String>,
        improved: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            original: original.into(),
            improved: improved.into(),
            explanation: explanation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keys_match_display_order() {
        let keys: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(
            keys,
            vec![
                "performance_issues",
                "memory_management",
                "code_style",
                "modern_cpp",
                "game_specific",
                "potential_bugs"
            ]
        );
    }

    #[test]
    fn test_analysis_serializes_all_categories_in_order() {
        let json = serde_json::to_string(&Analysis::default()).unwrap();
        let mut last = 0;
        for category in Category::ALL {
            let pos = json
                .find(&format!("\"{}\"", category.key()))
                .unwrap_or_else(|| panic!("missing key {}", category.key()));
            assert!(pos > last, "{} out of order", category.key());
            last = pos;
        }
    }

    #[test]
    fn test_analysis_iter_covers_every_category() {
        let analysis = Analysis::default();
        assert_eq!(analysis.iter().count(), 6);
        assert!(analysis.is_empty());
    }

    #[test]
    fn test_integration_record_stamps_timestamp() {
        let record = IntegrationRecord::new("old", "new", "why");
        assert_eq!(record.original, "old");
        assert_eq!(record.improved, "new");
        assert_eq!(record.explanation, "why");
        assert!(record.timestamp <= Utc::now());
    }
}
