//! Plain-text rendering for terminal output.

use crate::source::CliNode;
use ablatio_core::{column_title, delta_title, normalize_metric_name};
use ablatio_impact::{AnalysisReport, COMBINED, COMBINED_DELTA, Column, ImpactTable};

/// Placeholder for a value a metric could not produce.
pub const NOT_APPLICABLE: &str = "n/a";

/// Formats an optional score to four decimals.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.4}"),
        Some(v) if v.is_nan() => "NaN".to_string(),
        Some(v) if v > 0.0 => "∞".to_string(),
        Some(_) => "-∞".to_string(),
        None => NOT_APPLICABLE.to_string(),
    }
}

/// Formats a hop-count diameter; disconnected graphs print `∞`.
pub fn format_diameter(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.0}")
    } else {
        "∞".to_string()
    }
}

/// Maps a user-typed sort key to a table header.
///
/// Accepts headers verbatim (`Δ Combined`) as well as snake-case forms
/// (`combined_delta`, `closeness_delta`, `katz`).
pub fn sort_header(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed == COMBINED || trimmed.starts_with('Δ') {
        return trimmed.to_string();
    }
    let name = normalize_metric_name(trimmed);
    match name
        .strip_suffix("_delta")
        .or_else(|| name.strip_prefix("delta_"))
    {
        Some("combined") => COMBINED_DELTA.to_string(),
        Some(metric) => delta_title(metric),
        None if name == "combined" => COMBINED.to_string(),
        None => column_title(&name),
    }
}

// ============================================================================
// Text tables
// ============================================================================

/// Left-aligned first column, right-aligned value columns.
#[derive(Debug, Default)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    /// Starts a table with the given headers.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Appends a row; missing trailing cells render blank.
    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }
        widths
    }

    fn line(cells: &[String], widths: &[usize]) -> String {
        widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let pad = width.saturating_sub(cell.chars().count());
                if i == 0 {
                    format!("{cell}{}", " ".repeat(pad))
                } else {
                    format!("{}{cell}", " ".repeat(pad))
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    }

    /// Renders header, rule, and rows.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let rule: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

        let mut out = Vec::with_capacity(self.rows.len() + 2);
        out.push(Self::line(&self.headers, &widths));
        out.push("-".repeat(rule));
        for row in &self.rows {
            out.push(Self::line(row, &widths));
        }
        out.join("\n")
    }
}

// ============================================================================
// Reports
// ============================================================================

/// Column order of an impact table, matching [`ImpactTable::columns`].
fn column_order<N>(table: &ImpactTable<N>) -> Vec<Column>
where
    N: CliNode,
{
    (0..table.metrics().len())
        .flat_map(|i| [Column::New(i), Column::Delta(i)])
        .chain([Column::Combined, Column::CombinedDelta])
        .collect()
}

/// Renders an already-sorted analysis report as text.
pub fn render_report<N: CliNode>(report: &AnalysisReport<N>, limit: Option<usize>) -> String {
    let removed: Vec<String> = report.removed.iter().map(ToString::to_string).collect();
    let mut out = vec![format!(
        "Removed {} node(s): {}",
        removed.len(),
        removed.join(", ")
    )];

    let diameter = &report.diameter;
    let mut line = format!(
        "Diameter: {} -> {}",
        format_diameter(diameter.before),
        format_diameter(diameter.after)
    );
    if diameter.disconnected() {
        line.push_str(" (removal disconnects the graph)");
    }
    out.push(line);
    out.push(format!("Metrics: {}", report.table.metrics().join(", ")));
    for failure in &report.failures {
        out.push(format!("Failed: {} ({})", failure.metric, failure.message));
    }
    out.push(String::new());

    if report.table.is_empty() {
        out.push("No surviving nodes.".to_string());
    } else {
        let mut headers = vec!["Node".to_string()];
        headers.extend(report.table.columns());
        let mut text = TextTable::new(headers);

        let columns = column_order(&report.table);
        let shown = limit.unwrap_or(usize::MAX);
        for row in report.table.rows().iter().take(shown) {
            let mut cells = vec![row.node.to_string()];
            cells.extend(columns.iter().map(|&c| format_value(row.value(c))));
            text.push(cells);
        }
        out.push(text.render());

        let hidden = report.table.len().saturating_sub(shown);
        if hidden > 0 {
            out.push(format!("... {hidden} more row(s)"));
        }
    }

    out.push(String::new());
    out.push(format!("Completed in {:.2?}", report.elapsed));
    out.join("\n")
}
