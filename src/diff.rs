use similar::{ChangeTag, DiffTag, TextDiff};

/// Unchanged lines shown around each changed region
const CONTEXT_LINES: usize = 3;

const ADDED_BG: &str = "#ddffdd";
const REMOVED_BG: &str = "#ffdddd";
const TABLE_STYLE: &str =
    "width:100%;border-collapse:collapse;font-family:monospace;font-size:13px;";
const HEADER_STYLE: &str = "padding:4px 8px;text-align:left;border-bottom:1px solid #ccc;";
const GUTTER_STYLE: &str = "color:#888;padding:0 6px;text-align:right;vertical-align:top;";
const CELL_STYLE: &str = "padding:0 8px;white-space:pre-wrap;vertical-align:top;width:48%;";

/// Render a side-by-side HTML diff of two code strings.
///
/// Line-aligned via LCS: unchanged lines appear in both columns, removals
/// are tinted in the left column, additions in the right, and replaced
/// ranges are paired row by row. Long unchanged stretches collapse to
/// `CONTEXT_LINES` lines around each change. The fragment carries inline
/// styles only, so it stays readable inside a sandboxed frame.
///
/// Pure and total: any two inputs produce a valid fragment, and identical
/// inputs produce one with no tinted rows.
pub fn render_diff(original: &str, improved: &str) -> String {
    let diff = TextDiff::from_lines(original, improved);
    let groups = diff.grouped_ops(CONTEXT_LINES);

    let mut body = String::new();
    if groups.is_empty() {
        body.push_str(
            "<tr><td colspan=\"4\" style=\"padding:8px;text-align:center;color:#888;\">No differences found</td></tr>\n",
        );
    }

    for (group_idx, group) in groups.iter().enumerate() {
        if group_idx > 0 {
            body.push_str(
                "<tr><td colspan=\"4\" style=\"padding:2px 8px;color:#888;text-align:center;\">&#8943;</td></tr>\n",
            );
        }
        for op in group {
            match op.tag() {
                DiffTag::Equal => {
                    for change in diff.iter_changes(op) {
                        let text = line_text(change.value());
                        body.push_str("<tr>");
                        body.push_str(&cells(change.old_index(), Some(text), None));
                        body.push_str(&cells(change.new_index(), Some(text), None));
                        body.push_str("</tr>\n");
                    }
                }
                _ => {
                    let removed: Vec<_> = diff
                        .iter_changes(op)
                        .filter(|c| c.tag() == ChangeTag::Delete)
                        .collect();
                    let added: Vec<_> = diff
                        .iter_changes(op)
                        .filter(|c| c.tag() == ChangeTag::Insert)
                        .collect();
                    for row in 0..removed.len().max(added.len()) {
                        body.push_str("<tr>");
                        match removed.get(row) {
                            Some(change) => body.push_str(&cells(
                                change.old_index(),
                                Some(line_text(change.value())),
                                Some(REMOVED_BG),
                            )),
                            None => body.push_str(&cells(None, None, None)),
                        }
                        match added.get(row) {
                            Some(change) => body.push_str(&cells(
                                change.new_index(),
                                Some(line_text(change.value())),
                                Some(ADDED_BG),
                            )),
                            None => body.push_str(&cells(None, None, None)),
                        }
                        body.push_str("</tr>\n");
                    }
                }
            }
        }
    }

    format!(
        "<table style=\"{}\">\n<thead><tr><th colspan=\"2\" style=\"{}\">Original Code</th><th colspan=\"2\" style=\"{}\">Improved Code</th></tr></thead>\n<tbody>\n{}</tbody>\n</table>",
        TABLE_STYLE, HEADER_STYLE, HEADER_STYLE, body
    )
}

/// Line number gutter plus content cell for one side of a row
fn cells(number: Option<usize>, text: Option<&str>, background: Option<&str>) -> String {
    let tint = background
        .map(|color| format!("background:{};", color))
        .unwrap_or_default();
    format!(
        "<td style=\"{}\">{}</td><td style=\"{}{}\">{}</td>",
        GUTTER_STYLE,
        number.map(|n| (n + 1).to_string()).unwrap_or_default(),
        CELL_STYLE,
        tint,
        text.map(escape_html).unwrap_or_default(),
    )
}

/// Diff change values keep their newline; drop it (and a CR before it)
fn line_text(value: &str) -> &str {
    value
        .strip_suffix('\n')
        .map_or(value, |v| v.strip_suffix('\r').unwrap_or(v))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
