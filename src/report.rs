//! Console rendering of the aggregate metrics.

use crate::eval::EvalSummary;

/// Format a metric rounded to 5 decimal digits, trailing zeros trimmed but
/// always keeping at least one digit after the point (`1.0`, `0.66667`).
pub fn format_metric(value: f64) -> String {
    let mut s = format!("{:.5}", value);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.push('0');
    }
    s
}

/// Render the results block written to stdout.
pub fn render_summary(summary: &EvalSummary) -> String {
    format!(
        "Results:\n\tPrecision: {}\n\tRecall: {}\n\tF1: {}",
        format_metric(summary.precision),
        format_metric(summary.recall),
        format_metric(summary.f1)
    )
}
