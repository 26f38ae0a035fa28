use crate::types::Analysis;

/// Render the findings map as a plain-text report.
///
/// One `##` heading per non-empty category in display order, one bullet per
/// finding with its line number, issue label, code snippet, and suggestion.
/// Suitable both for on-screen display and for embedding verbatim into the
/// completion prompt. Categories with no findings are omitted from the text
/// while remaining present in the `Analysis` itself.
pub fn format_analysis(analysis: &Analysis) -> String {
    let mut lines = Vec::new();

    for (category, findings) in analysis.iter() {
        if findings.is_empty() {
            continue;
        }
        lines.push(format!("## {}", category.display_name()));
        for finding in findings {
            lines.push(format!("- Line {}: {}", finding.line, finding.issue));
            lines.push(format!("  Code: {}", finding.code));
            lines.push(format!("  Suggestion: {}", finding.suggestion));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
