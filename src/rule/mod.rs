//! Line-oriented pattern analysis of C++ source.

mod detectors;

use crate::types::{Analysis, Category, Finding};

/// Bounded look-back over already-scanned lines: remembers the most recent
/// line index where any trigger token occurred, so context detectors run in
/// O(1) per line instead of re-slicing the line buffer.
struct LookBack {
    window: usize,
    tokens: &'static [&'static str],
    last_hit: Option<usize>,
}

impl LookBack {
    fn new(window: usize, tokens: &'static [&'static str]) -> Self {
        Self {
            window,
            tokens,
            last_hit: None,
        }
    }

    /// True when a trigger token occurred within `window` lines before `idx`.
    /// The current line is never counted; callers observe it afterwards.
    fn active(&self, idx: usize) -> bool {
        self.last_hit.is_some_and(|hit| idx - hit <= self.window)
    }

    fn observe(&mut self, idx: usize, line: &str) {
        if self.tokens.iter().any(|token| line.contains(token)) {
            self.last_hit = Some(idx);
        }
    }
}

fn record(
    analysis: &mut Analysis,
    category: Category,
    line_no: u32,
    line: &str,
    issue: &str,
    suggestion: &str,
) {
    analysis.findings_mut(category).push(Finding {
        line: line_no,
        code: line.trim().to_string(),
        issue: issue.to_string(),
        suggestion: suggestion.to_string(),
    });
}

/// Scan C++ source for common issues and classify them into the six fixed
/// categories.
///
/// Total over any input: the scan is a single pass over `'\n'`-split lines,
/// the worst a malformed line can do is reduce detection accuracy, and the
/// result always carries every category. Detectors are independent; none
/// reads another's output.
pub fn analyze(code: &str) -> Analysis {
    let mut analysis = Analysis::default();

    let mut loop_context = LookBack::new(5, &["for", "while"]);
    let mut hot_path_context = LookBack::new(10, &["update", "render"]);
    let mut null_guard_context = LookBack::new(3, &["if", "nullptr", "NULL"]);

    for (idx, line) in code.split('\n').enumerate() {
        let line_no = (idx + 1) as u32;

        if detectors::raw_pointer(line) {
            record(
                &mut analysis,
                Category::MemoryManagement,
                line_no,
                line,
                "Raw pointer usage",
                "Consider using smart pointers (std::unique_ptr or std::shared_ptr) for automatic memory management",
            );
        }

        if detectors::c_style_array(line) {
            record(
                &mut analysis,
                Category::ModernCpp,
                line_no,
                line,
                "C-style array usage",
                "Consider using std::array for fixed-size arrays or std::vector for dynamic arrays",
            );
        }

        if detectors::index_loop(line) {
            record(
                &mut analysis,
                Category::ModernCpp,
                line_no,
                line,
                "Index-based loop over container",
                "Consider using range-based for loop: for (auto& element : container)",
            );
        }

        if detectors::sqrt_call(line) && loop_context.active(idx) {
            record(
                &mut analysis,
                Category::PerformanceIssues,
                line_no,
                line,
                "Expensive sqrt operation in loop",
                "For magnitude comparisons, consider using squared magnitude (x*x + y*y) instead of sqrt(x*x + y*y)",
            );
        }

        if detectors::string_heavy(line) && hot_path_context.active(idx) {
            record(
                &mut analysis,
                Category::PerformanceIssues,
                line_no,
                line,
                "String operations in performance-critical code",
                "String operations can be expensive. Consider moving string manipulations outside of update/render loops",
            );
        }

        if detectors::float_comparison(line) {
            record(
                &mut analysis,
                Category::GameSpecific,
                line_no,
                line,
                "Direct floating-point comparison",
                "Use epsilon-based comparison for floating-point values to avoid precision issues",
            );
        }

        if detectors::magic_number(line) {
            record(
                &mut analysis,
                Category::CodeStyle,
                line_no,
                line,
                "Magic number usage",
                "Define named constants for magic numbers to improve code readability and maintainability",
            );
        }

        for _ty in detectors::uninitialized_primitives(line) {
            record(
                &mut analysis,
                Category::PotentialBugs,
                line_no,
                line,
                "Uninitialized primitive variable",
                "Initialize variables at declaration to avoid undefined behavior",
            );
        }

        if detectors::pointer_member_access(line) && !null_guard_context.active(idx) {
            record(
                &mut analysis,
                Category::PotentialBugs,
                line_no,
                line,
                "Potential null pointer dereference",
                "Add null check before dereferencing pointers",
            );
        }

        loop_context.observe(idx, line);
        hot_path_context.observe(idx, line);
        null_guard_context.observe(idx, line);
    }

    analysis
}
