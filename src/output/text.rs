//! Plain-text rendering of comparison tables for the terminal.

use crate::table::ComparisonTable;

const ACTION_WIDTH: usize = 32;
const VALUE_WIDTH: usize = 18;

/// Render a table as aligned text, undefined cells as `n/a`
pub fn render_table(table: &ComparisonTable) -> String {
    let rule = "-".repeat(ACTION_WIDTH + 2 * (VALUE_WIDTH + 3));
    let mut lines = Vec::with_capacity(table.rows.len() + 4);

    lines.push(format!("  {} - {}", table.app, table.feature.title()));
    lines.push(format!(
        "  {:<aw$} | {:>vw$} | {:>vw$}",
        "action",
        table.columns[0],
        table.columns[1],
        aw = ACTION_WIDTH,
        vw = VALUE_WIDTH
    ));
    lines.push(format!("  {}", rule));

    for row in &table.rows {
        let label = row.action.as_str();
        // Keep the tail, which is the distinguishing part of long names
        let label = if label.chars().count() > ACTION_WIDTH {
            let tail: String = label
                .chars()
                .skip(label.chars().count() - (ACTION_WIDTH - 3))
                .collect();
            format!("...{}", tail)
        } else {
            label.to_string()
        };

        lines.push(format!(
            "  {:<aw$} | {:>vw$} | {:>vw$}",
            label,
            row.default.to_string(),
            row.overlay.to_string(),
            aw = ACTION_WIDTH,
            vw = VALUE_WIDTH
        ));
    }

    lines.join("\n")
}
